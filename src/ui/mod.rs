pub mod call_dialog;
pub mod chat_view;
pub mod contacts;
pub mod favorites;
pub mod groups;
pub mod login;
pub mod main_window;
pub mod profile_panel;
pub mod sidebar;

use gtk4 as gtk;
use gtk4::prelude::*;

pub fn pad(widget: &impl IsA<gtk::Widget>, px: i32) {
    widget.set_margin_top(px);
    widget.set_margin_bottom(px);
    widget.set_margin_start(px);
    widget.set_margin_end(px);
}

pub fn clear_box(container: &gtk::Box) {
    while let Some(child) = container.first_child() {
        container.remove(&child);
    }
}

pub fn clear_list(list: &gtk::ListBox) {
    while let Some(child) = list.first_child() {
        list.remove(&child);
    }
}

pub fn avatar_label(glyph: &str, css: &str) -> gtk::Label {
    let label = gtk::Label::new(Some(glyph));
    label.add_css_class(css);
    label
}

/// Search box placed above every list.
pub fn search_entry(placeholder: &str) -> gtk::SearchEntry {
    let entry = gtk::SearchEntry::new();
    entry.set_placeholder_text(Some(placeholder));
    entry.set_hexpand(true);
    entry
}

pub fn scrolled(child: &impl IsA<gtk::Widget>) -> gtk::ScrolledWindow {
    let scroller = gtk::ScrolledWindow::builder()
        .vexpand(true)
        .hexpand(true)
        .hscrollbar_policy(gtk::PolicyType::Never)
        .build();
    scroller.set_child(Some(child));
    scroller
}
