use std::cell::RefCell;
use std::rc::Rc;

use adw::prelude::*;
use cheesehome::api::events::Action;
use cheesehome::profile::{AVATAR_EMOJIS, ProfileDraft};
use gtk4 as gtk;

use crate::app::AppContext;

/// Profile and settings, shown in place of the tabs.
pub struct ProfilePanel {
    ctx: Rc<AppContext>,
    root: gtk::Box,
    avatar: gtk::Label,
    title: gtk::Label,
    address: gtk::Label,
    name_entry: gtk::Entry,
    notifications: gtk::Switch,
    dark_mode: gtk::Switch,
    draft: RefCell<Option<ProfileDraft>>,
    on_close: RefCell<Option<Rc<dyn Fn()>>>,
    on_logout: RefCell<Option<Rc<dyn Fn()>>>,
}

fn switch_row(title: &str, subtitle: &str) -> (gtk::Box, gtk::Switch) {
    let row = gtk::Box::new(gtk::Orientation::Horizontal, 12);
    let labels = gtk::Box::new(gtk::Orientation::Vertical, 2);
    labels.set_hexpand(true);
    let title = gtk::Label::new(Some(title));
    title.set_halign(gtk::Align::Start);
    let subtitle = gtk::Label::new(Some(subtitle));
    subtitle.add_css_class("dim-label");
    subtitle.add_css_class("caption");
    subtitle.set_halign(gtk::Align::Start);
    subtitle.set_wrap(true);
    labels.append(&title);
    labels.append(&subtitle);
    let switch = gtk::Switch::new();
    switch.set_valign(gtk::Align::Center);
    row.append(&labels);
    row.append(&switch);
    (row, switch)
}

fn apply_color_scheme(dark: bool) {
    let scheme = if dark {
        adw::ColorScheme::ForceDark
    } else {
        adw::ColorScheme::Default
    };
    adw::StyleManager::default().set_color_scheme(scheme);
}

impl ProfilePanel {
    pub fn new(ctx: &Rc<AppContext>) -> Rc<Self> {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
        crate::ui::pad(&root, 8);

        let header = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        let back_btn = gtk::Button::from_icon_name("go-previous-symbolic");
        back_btn.add_css_class("flat");
        let heading = gtk::Label::new(Some("Profile & settings"));
        heading.add_css_class("title-4");
        header.append(&back_btn);
        header.append(&heading);
        root.append(&header);

        let body = gtk::Box::new(gtk::Orientation::Vertical, 12);
        let avatar = crate::ui::avatar_label("", "title-1");
        let title = gtk::Label::new(None);
        title.add_css_class("title-3");
        let address = gtk::Label::new(None);
        address.add_css_class("dim-label");
        body.append(&avatar);
        body.append(&title);
        body.append(&address);
        body.append(&gtk::Separator::new(gtk::Orientation::Horizontal));

        let name_label = gtk::Label::new(Some("Name"));
        name_label.set_halign(gtk::Align::Start);
        let name_entry = gtk::Entry::new();
        name_entry.set_placeholder_text(Some("Your name"));
        body.append(&name_label);
        body.append(&name_entry);

        let avatar_label = gtk::Label::new(Some("Avatar"));
        avatar_label.set_halign(gtk::Align::Start);
        body.append(&avatar_label);
        let grid = gtk::Grid::new();
        grid.set_row_spacing(4);
        grid.set_column_spacing(4);
        grid.set_column_homogeneous(true);
        body.append(&grid);
        body.append(&gtk::Separator::new(gtk::Orientation::Horizontal));

        let (notify_row, notifications) =
            switch_row("Notifications", "Get notified about new messages");
        notifications.set_active(true);
        let (dark_row, dark_mode) = switch_row("Dark theme", "Use the dark color scheme");
        body.append(&notify_row);
        body.append(&dark_row);
        body.append(&gtk::Separator::new(gtk::Orientation::Horizontal));

        let logout_btn = gtk::Button::with_label("Log out");
        logout_btn.add_css_class("destructive-action");
        body.append(&logout_btn);

        root.append(&crate::ui::scrolled(&body));

        let panel = Rc::new(Self {
            ctx: ctx.clone(),
            root,
            avatar,
            title,
            address,
            name_entry,
            notifications,
            dark_mode,
            draft: RefCell::new(None),
            on_close: RefCell::new(None),
            on_logout: RefCell::new(None),
        });

        for (idx, emoji) in AVATAR_EMOJIS.into_iter().enumerate() {
            let btn = gtk::Button::with_label(emoji);
            btn.add_css_class("flat");
            btn.add_css_class("title-3");
            let weak = Rc::downgrade(&panel);
            btn.connect_clicked(move |_| {
                let Some(panel) = weak.upgrade() else { return };
                if let Some(draft) = panel.draft.borrow_mut().as_mut() {
                    if draft.select_avatar(emoji) {
                        panel.avatar.set_label(emoji);
                    }
                }
            });
            grid.attach(&btn, (idx % 5) as i32, (idx / 5) as i32, 1, 1);
        }
        {
            let weak = Rc::downgrade(&panel);
            panel.name_entry.connect_changed(move |entry| {
                let Some(panel) = weak.upgrade() else { return };
                if let Some(draft) = panel.draft.borrow_mut().as_mut() {
                    draft.name = entry.text().to_string();
                    panel.title.set_label(&draft.name);
                }
            });
        }
        {
            let weak = Rc::downgrade(&panel);
            panel.notifications.connect_active_notify(move |switch| {
                let Some(panel) = weak.upgrade() else { return };
                if let Some(draft) = panel.draft.borrow_mut().as_mut() {
                    draft.notifications = switch.is_active();
                }
            });
        }
        {
            let weak = Rc::downgrade(&panel);
            panel.dark_mode.connect_active_notify(move |switch| {
                let Some(panel) = weak.upgrade() else { return };
                let dark = switch.is_active();
                if let Some(draft) = panel.draft.borrow_mut().as_mut() {
                    draft.dark_mode = dark;
                }
                panel.ctx.client.borrow_mut().dispatch(Action::SetDarkMode(dark));
                apply_color_scheme(panel.ctx.client.borrow().router().dark_mode());
            });
        }
        {
            let weak = Rc::downgrade(&panel);
            back_btn.connect_clicked(move |_| {
                if let Some(panel) = weak.upgrade() {
                    panel.close();
                }
            });
        }
        {
            let weak = Rc::downgrade(&panel);
            logout_btn.connect_clicked(move |_| {
                let Some(panel) = weak.upgrade() else { return };
                panel.ctx.client.borrow_mut().logout();
                apply_color_scheme(panel.ctx.client.borrow().router().dark_mode());
                let callback = panel.on_logout.borrow().clone();
                if let Some(callback) = callback {
                    callback();
                }
            });
        }

        panel
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn connect_close(&self, f: impl Fn() + 'static) {
        *self.on_close.borrow_mut() = Some(Rc::new(f));
    }

    pub fn connect_logout(&self, f: impl Fn() + 'static) {
        *self.on_logout.borrow_mut() = Some(Rc::new(f));
    }

    /// Resets the fields from the signed-in user. Notifications keep their
    /// position between openings; dark mode follows the session.
    pub fn load(&self) {
        let Some(mut draft) = self.ctx.client.borrow().profile_draft() else {
            return;
        };
        let dark = self.ctx.client.borrow().router().dark_mode();
        self.draft.replace(None);
        self.dark_mode.set_active(dark);
        draft.notifications = self.notifications.is_active();
        draft.dark_mode = dark;
        if let Some(user) = self.ctx.client.borrow().current_user() {
            self.address.set_label(&user.address);
        }
        self.avatar.set_label(draft.avatar());
        self.title.set_label(&draft.name);
        // The draft stays unset while filling the entry so the change handler stays quiet
        self.name_entry.set_text(&draft.name);
        self.draft.replace(Some(draft));
    }

    /// Applies the draft and returns to the tabs.
    pub fn close(&self) {
        let draft = self.draft.borrow().clone();
        if let Some(draft) = draft {
            self.ctx.client.borrow_mut().save_profile(&draft);
        }
        let callback = self.on_close.borrow().clone();
        if let Some(callback) = callback {
            callback();
        }
    }
}
