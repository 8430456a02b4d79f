use std::rc::Rc;

use cheesehome::api::models::Contact;
use cheesehome::search::partition_contacts;
use gtk4 as gtk;
use gtk4::prelude::*;
use log::info;

use crate::app::AppContext;

pub struct ContactsPanel {
    ctx: Rc<AppContext>,
    root: gtk::Box,
    search: gtk::SearchEntry,
    sections: gtk::Box,
}

impl ContactsPanel {
    pub fn new(ctx: &Rc<AppContext>) -> Rc<Self> {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
        crate::ui::pad(&root, 8);
        let search = crate::ui::search_entry("Search contacts…");
        root.append(&search);

        let sections = gtk::Box::new(gtk::Orientation::Vertical, 12);
        root.append(&crate::ui::scrolled(&sections));

        let panel = Rc::new(Self {
            ctx: ctx.clone(),
            root,
            search,
            sections,
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
        crate::ui::clear_box(&self.sections);
        let client = self.ctx.client.borrow();
        let hits = client.search_contacts(&self.search.text());
        let (members, others) = partition_contacts(&hits);
        if !members.is_empty() {
            self.sections
                .append(&section(&format!("IN CHEESEHOME ({})", members.len()), &members, true));
        }
        if !others.is_empty() {
            self.sections
                .append(&section(&format!("OTHER CONTACTS ({})", others.len()), &others, false));
        }
    }
}

fn section(title: &str, contacts: &[&Contact], members: bool) -> gtk::Box {
    let section = gtk::Box::new(gtk::Orientation::Vertical, 4);
    let heading = gtk::Label::new(Some(title));
    heading.add_css_class("caption-heading");
    heading.add_css_class("dim-label");
    heading.set_halign(gtk::Align::Start);
    section.append(&heading);

    let list = gtk::ListBox::new();
    list.add_css_class("boxed-list");
    list.set_selection_mode(gtk::SelectionMode::None);
    for contact in contacts {
        let row = gtk::Box::new(gtk::Orientation::Horizontal, 10);
        crate::ui::pad(&row, 8);
        let avatar = crate::ui::avatar_label(&contact.avatar, "title-2");
        if !members {
            avatar.set_opacity(0.5);
        }
        row.append(&avatar);

        let text = gtk::Box::new(gtk::Orientation::Vertical, 2);
        text.set_hexpand(true);
        let name = gtk::Label::new(Some(&contact.name));
        name.add_css_class("heading");
        name.set_halign(gtk::Align::Start);
        let phone = gtk::Label::new(Some(&contact.phone));
        phone.add_css_class("dim-label");
        phone.set_halign(gtk::Align::Start);
        text.append(&name);
        text.append(&phone);
        row.append(&text);

        if contact.is_online {
            let online = gtk::Label::new(Some("online"));
            online.add_css_class("success");
            online.add_css_class("caption");
            row.append(&online);
        }
        if !members {
            let invite = gtk::Button::with_label("Invite");
            invite.set_valign(gtk::Align::Center);
            let name = contact.name.clone();
            invite.connect_clicked(move |_| info!("Invite requested for {name}"));
            row.append(&invite);
        }
        list.append(&row);
    }
    section.append(&list);
    section
}
