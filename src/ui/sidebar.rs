use std::cell::RefCell;
use std::rc::Rc;

use cheesehome::api::models::Conversation;
use gtk4 as gtk;
use gtk4::prelude::*;

use crate::app::AppContext;

/// Searchable chat list shown on the "Chats" tab.
pub struct Sidebar {
    ctx: Rc<AppContext>,
    root: gtk::Box,
    search: gtk::SearchEntry,
    list: gtk::ListBox,
    row_ids: RefCell<Vec<String>>,
    on_select: RefCell<Option<Rc<dyn Fn(&str)>>>,
}

impl Sidebar {
    pub fn new(ctx: &Rc<AppContext>) -> Rc<Self> {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
        crate::ui::pad(&root, 8);

        let search = crate::ui::search_entry("Search chats…");
        root.append(&search);

        let list = gtk::ListBox::new();
        list.add_css_class("navigation-sidebar");
        list.set_selection_mode(gtk::SelectionMode::Single);
        root.append(&crate::ui::scrolled(&list));

        let sidebar = Rc::new(Self {
            ctx: ctx.clone(),
            root,
            search,
            list,
            row_ids: RefCell::new(Vec::new()),
            on_select: RefCell::new(None),
        });

        {
            let weak = Rc::downgrade(&sidebar);
            sidebar.search.connect_search_changed(move |_| {
                if let Some(sidebar) = weak.upgrade() {
                    sidebar.refresh();
                }
            });
        }
        {
            let weak = Rc::downgrade(&sidebar);
            sidebar.list.connect_row_activated(move |_, row| {
                let Some(sidebar) = weak.upgrade() else { return };
                let id = usize::try_from(row.index())
                    .ok()
                    .and_then(|idx| sidebar.row_ids.borrow().get(idx).cloned());
                let callback = sidebar.on_select.borrow().clone();
                if let (Some(id), Some(callback)) = (id, callback) {
                    callback(&id);
                }
            });
        }

        sidebar.refresh();
        sidebar
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn connect_selected(&self, f: impl Fn(&str) + 'static) {
        *self.on_select.borrow_mut() = Some(Rc::new(f));
    }

    pub fn refresh(&self) {
        crate::ui::clear_list(&self.list);
        let client = self.ctx.client.borrow();
        let selected = client.router().selected_conversation().map(str::to_owned);
        let mut ids = Vec::new();
        for conv in client.search_conversations(&self.search.text()) {
            let row = gtk::ListBoxRow::new();
            row.set_child(Some(&conversation_row(conv)));
            self.list.append(&row);
            if selected.as_deref() == Some(conv.id.as_str()) {
                self.list.select_row(Some(&row));
            }
            ids.push(conv.id.clone());
        }
        *self.row_ids.borrow_mut() = ids;
    }
}

fn conversation_row(conv: &Conversation) -> gtk::Box {
    let row = gtk::Box::new(gtk::Orientation::Horizontal, 10);
    crate::ui::pad(&row, 8);

    let avatar = gtk::Overlay::new();
    avatar.set_child(Some(&crate::ui::avatar_label(&conv.avatar, "title-2")));
    if conv.is_online {
        let dot = gtk::Label::new(Some("●"));
        dot.add_css_class("success");
        dot.set_halign(gtk::Align::End);
        dot.set_valign(gtk::Align::End);
        avatar.add_overlay(&dot);
    }
    row.append(&avatar);

    let text = gtk::Box::new(gtk::Orientation::Vertical, 2);
    text.set_hexpand(true);

    let top = gtk::Box::new(gtk::Orientation::Horizontal, 6);
    let name = gtk::Label::new(Some(&conv.name));
    name.add_css_class("heading");
    name.set_halign(gtk::Align::Start);
    name.set_hexpand(true);
    name.set_ellipsize(gtk::pango::EllipsizeMode::End);
    let time = gtk::Label::new(Some(&conv.last_activity));
    time.add_css_class("dim-label");
    time.add_css_class("caption");
    top.append(&name);
    top.append(&time);
    text.append(&top);

    let bottom = gtk::Box::new(gtk::Orientation::Horizontal, 6);
    let preview = gtk::Label::new(Some(conv.preview()));
    preview.set_halign(gtk::Align::Start);
    preview.set_hexpand(true);
    preview.set_ellipsize(gtk::pango::EllipsizeMode::End);
    if conv.is_typing {
        preview.add_css_class("accent");
    } else {
        preview.add_css_class("dim-label");
    }
    bottom.append(&preview);
    if let Some(unread) = conv.unread_badge() {
        let badge = gtk::Label::new(Some(&unread.to_string()));
        badge.add_css_class("badge");
        badge.add_css_class("accent");
        bottom.append(&badge);
    }
    text.append(&bottom);

    row.append(&text);
    row
}
