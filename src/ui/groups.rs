use std::rc::Rc;

use cheesehome::api::models::Group;
use gtk4 as gtk;
use gtk4::prelude::*;

use crate::app::AppContext;

pub struct GroupsPanel {
    ctx: Rc<AppContext>,
    root: gtk::Box,
    search: gtk::SearchEntry,
    list: gtk::ListBox,
}

impl GroupsPanel {
    pub fn new(ctx: &Rc<AppContext>) -> Rc<Self> {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
        crate::ui::pad(&root, 8);
        let search = crate::ui::search_entry("Search groups…");
        root.append(&search);

        let list = gtk::ListBox::new();
        list.add_css_class("navigation-sidebar");
        list.set_selection_mode(gtk::SelectionMode::None);
        root.append(&crate::ui::scrolled(&list));

        let panel = Rc::new(Self {
            ctx: ctx.clone(),
            root,
            search,
            list,
        });
        {
            let weak = Rc::downgrade(&panel);
            panel.search.connect_search_changed(move |_| {
                if let Some(panel) = weak.upgrade() {
                    panel.refresh();
                }
            });
        }
        panel.refresh();
        panel
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn refresh(&self) {
        crate::ui::clear_list(&self.list);
        let client = self.ctx.client.borrow();
        for group in client.search_groups(&self.search.text()) {
            self.list.append(&group_row(group));
        }
    }
}

fn group_row(group: &Group) -> gtk::Box {
    let row = gtk::Box::new(gtk::Orientation::Horizontal, 10);
    crate::ui::pad(&row, 8);
    row.append(&crate::ui::avatar_label(&group.avatar, "title-2"));

    let text = gtk::Box::new(gtk::Orientation::Vertical, 2);
    text.set_hexpand(true);
    let top = gtk::Box::new(gtk::Orientation::Horizontal, 6);
    let name = gtk::Label::new(Some(&group.name));
    name.add_css_class("heading");
    name.set_halign(gtk::Align::Start);
    name.set_hexpand(true);
    top.append(&name);
    if let Some(unread) = group.unread.filter(|n| *n > 0) {
        let badge = gtk::Label::new(Some(&unread.to_string()));
        badge.add_css_class("accent");
        top.append(&badge);
    }
    text.append(&top);

    let members = gtk::Label::new(Some(&format!("{} members", group.members)));
    members.add_css_class("dim-label");
    members.set_halign(gtk::Align::Start);
    text.append(&members);
    if let Some(last) = &group.last_message {
        let preview = gtk::Label::new(Some(last));
        preview.add_css_class("dim-label");
        preview.set_halign(gtk::Align::Start);
        preview.set_ellipsize(gtk::pango::EllipsizeMode::End);
        text.append(&preview);
    }
    row.append(&text);
    row
}
