use std::rc::Rc;

use cheesehome::api::models::FavoriteEntry;
use gtk4 as gtk;
use gtk4::prelude::*;

use crate::app::AppContext;

/// Starred messages from every conversation.
pub struct FavoritesPanel {
    ctx: Rc<AppContext>,
    root: gtk::Box,
    content: gtk::Box,
}

impl FavoritesPanel {
    pub fn new(ctx: &Rc<AppContext>) -> Rc<Self> {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
        crate::ui::pad(&root, 8);
        let title = gtk::Label::new(Some("★ Favorite messages"));
        title.add_css_class("title-4");
        title.set_halign(gtk::Align::Start);
        root.append(&title);

        let content = gtk::Box::new(gtk::Orientation::Vertical, 6);
        root.append(&crate::ui::scrolled(&content));

        let panel = Rc::new(Self {
            ctx: ctx.clone(),
            root,
            content,
        });
        panel.refresh();
        panel
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn refresh(&self) {
        crate::ui::clear_box(&self.content);
        let favorites = self.ctx.client.borrow().favorites();
        if favorites.is_empty() {
            let empty = gtk::Box::new(gtk::Orientation::Vertical, 6);
            empty.set_valign(gtk::Align::Center);
            empty.set_vexpand(true);
            let hint = gtk::Label::new(Some("No favorite messages yet"));
            hint.add_css_class("dim-label");
            let sub = gtk::Label::new(Some("Tap the star next to a message to keep it here"));
            sub.add_css_class("dim-label");
            sub.add_css_class("caption");
            sub.set_wrap(true);
            empty.append(&hint);
            empty.append(&sub);
            self.content.append(&empty);
            return;
        }
        for favorite in &favorites {
            self.content.append(&favorite_row(favorite));
        }
    }
}

fn favorite_row(favorite: &FavoriteEntry) -> gtk::Box {
    let row = gtk::Box::new(gtk::Orientation::Horizontal, 10);
    crate::ui::pad(&row, 8);
    let avatar = crate::ui::avatar_label(&favorite.avatar, "title-2");
    avatar.set_valign(gtk::Align::Start);
    row.append(&avatar);

    let text = gtk::Box::new(gtk::Orientation::Vertical, 4);
    text.set_hexpand(true);
    let top = gtk::Box::new(gtk::Orientation::Horizontal, 6);
    let from = gtk::Label::new(Some(&favorite.conversation_name));
    from.add_css_class("heading");
    from.set_halign(gtk::Align::Start);
    from.set_hexpand(true);
    let time = gtk::Label::new(Some(&favorite.timestamp));
    time.add_css_class("caption");
    time.add_css_class("dim-label");
    top.append(&from);
    top.append(&time);
    text.append(&top);

    let body = gtk::Label::new(Some(&favorite.text));
    body.add_css_class("card");
    body.set_wrap(true);
    body.set_xalign(0.0);
    crate::ui::pad(&body, 4);
    text.append(&body);
    row.append(&text);
    row
}
