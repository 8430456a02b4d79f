use std::cell::RefCell;
use std::rc::Rc;

use cheesehome::REACTION_EMOJIS;
use cheesehome::api::models::Message;
use cheesehome::router::CallKind;
use gtk4 as gtk;
use gtk4::prelude::*;
use log::warn;

use crate::app::AppContext;

/// Right-hand pane: the open conversation, or a placeholder.
pub struct ChatView {
    ctx: Rc<AppContext>,
    root: gtk::Stack,
    avatar: gtk::Label,
    name: gtk::Label,
    presence: gtk::Label,
    messages_box: gtk::Box,
    scroller: gtk::ScrolledWindow,
    entry: gtk::Entry,
    on_changed: RefCell<Option<Rc<dyn Fn()>>>,
    on_call: RefCell<Option<Rc<dyn Fn(CallKind)>>>,
}

impl ChatView {
    pub fn new(ctx: &Rc<AppContext>) -> Rc<Self> {
        let root = gtk::Stack::new();

        let placeholder = gtk::Box::new(gtk::Orientation::Vertical, 12);
        placeholder.set_valign(gtk::Align::Center);
        placeholder.append(&crate::ui::avatar_label("🧀", "title-1"));
        let hint = gtk::Label::new(Some("Select a chat to start messaging"));
        hint.add_css_class("dim-label");
        placeholder.append(&hint);
        root.add_named(&placeholder, Some("empty"));

        let pane = gtk::Box::new(gtk::Orientation::Vertical, 6);
        crate::ui::pad(&pane, 8);

        // Header: who we talk to plus call buttons
        let header = gtk::Box::new(gtk::Orientation::Horizontal, 10);
        let avatar = crate::ui::avatar_label("", "title-2");
        let titles = gtk::Box::new(gtk::Orientation::Vertical, 0);
        titles.set_hexpand(true);
        let name = gtk::Label::new(None);
        name.add_css_class("heading");
        name.set_halign(gtk::Align::Start);
        let presence = gtk::Label::new(None);
        presence.add_css_class("dim-label");
        presence.add_css_class("caption");
        presence.set_halign(gtk::Align::Start);
        titles.append(&name);
        titles.append(&presence);
        let audio_btn = gtk::Button::from_icon_name("call-start-symbolic");
        audio_btn.set_tooltip_text(Some("Audio call"));
        audio_btn.add_css_class("flat");
        let video_btn = gtk::Button::from_icon_name("camera-video-symbolic");
        video_btn.set_tooltip_text(Some("Video call"));
        video_btn.add_css_class("flat");
        header.append(&avatar);
        header.append(&titles);
        header.append(&audio_btn);
        header.append(&video_btn);
        pane.append(&header);
        pane.append(&gtk::Separator::new(gtk::Orientation::Horizontal));

        let messages_box = gtk::Box::new(gtk::Orientation::Vertical, 10);
        crate::ui::pad(&messages_box, 4);
        let scroller = crate::ui::scrolled(&messages_box);
        pane.append(&scroller);

        // Input row
        let input_row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        let entry = gtk::Entry::new();
        entry.set_hexpand(true);
        entry.set_placeholder_text(Some("Type a message…"));
        let send_btn = gtk::Button::from_icon_name("mail-send-symbolic");
        send_btn.add_css_class("suggested-action");
        input_row.append(&entry);
        input_row.append(&send_btn);
        pane.append(&input_row);

        root.add_named(&pane, Some("chat"));
        root.set_visible_child_name("empty");

        let view = Rc::new(Self {
            ctx: ctx.clone(),
            root,
            avatar,
            name,
            presence,
            messages_box,
            scroller,
            entry,
            on_changed: RefCell::new(None),
            on_call: RefCell::new(None),
        });

        // Send actions
        {
            let weak = Rc::downgrade(&view);
            let send: Rc<dyn Fn()> = Rc::new(move || {
                if let Some(view) = weak.upgrade() {
                    view.send();
                }
            });
            {
                let send = send.clone();
                send_btn.connect_clicked(move |_| (send)());
            }
            view.entry.connect_activate(move |_| (send)());
        }
        for (button, kind) in [(&audio_btn, CallKind::Audio), (&video_btn, CallKind::Video)] {
            let weak = Rc::downgrade(&view);
            button.connect_clicked(move |_| {
                let Some(view) = weak.upgrade() else { return };
                let callback = view.on_call.borrow().clone();
                if let Some(callback) = callback {
                    callback(kind);
                }
            });
        }

        view
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    /// Called after anything that other panels display has changed.
    pub fn connect_changed(&self, f: impl Fn() + 'static) {
        *self.on_changed.borrow_mut() = Some(Rc::new(f));
    }

    pub fn connect_call(&self, f: impl Fn(CallKind) + 'static) {
        *self.on_call.borrow_mut() = Some(Rc::new(f));
    }

    fn notify_changed(&self) {
        let callback = self.on_changed.borrow().clone();
        if let Some(callback) = callback {
            callback();
        }
    }

    fn send(self: &Rc<Self>) {
        let text = self.entry.text().to_string();
        let sent = {
            let mut client = self.ctx.client.borrow_mut();
            let Some(conv_id) = client.router().selected_conversation().map(str::to_owned) else {
                return;
            };
            match client.send_message(&conv_id, &text) {
                Ok(sent) => sent.is_some(),
                Err(e) => {
                    warn!("Send failed: {e}");
                    false
                }
            }
        };
        if !sent {
            return;
        }
        self.entry.set_text("");
        self.refresh();
        self.notify_changed();
        let adj = self.scroller.vadjustment();
        adj.set_value(adj.upper());
    }

    fn react(self: &Rc<Self>, message_id: &str, emoji: &str) {
        let result = {
            let mut client = self.ctx.client.borrow_mut();
            match client.router().selected_conversation().map(str::to_owned) {
                Some(conv_id) => client.add_reaction(&conv_id, message_id, emoji).map(|_| ()),
                None => return,
            }
        };
        if let Err(e) = result {
            warn!("Reaction failed: {e}");
        }
        self.refresh();
    }

    fn toggle_favorite(self: &Rc<Self>, message_id: &str) {
        let result = {
            let mut client = self.ctx.client.borrow_mut();
            match client.router().selected_conversation().map(str::to_owned) {
                Some(conv_id) => client.toggle_favorite(&conv_id, message_id).map(|_| ()),
                None => return,
            }
        };
        if let Err(e) = result {
            warn!("Favorite toggle failed: {e}");
        }
        self.refresh();
        self.notify_changed();
    }

    /// Rebuilds the pane from the selected conversation.
    pub fn refresh(self: &Rc<Self>) {
        crate::ui::clear_box(&self.messages_box);
        let client = self.ctx.client.borrow();
        let (Some(conv), Some(user)) = (client.selected_conversation(), client.current_user())
        else {
            self.root.set_visible_child_name("empty");
            return;
        };
        self.avatar.set_label(&conv.avatar);
        self.name.set_label(&conv.name);
        self.presence.set_label(&conv.presence);
        for msg in &conv.messages {
            self.messages_box.append(&self.message_row(msg, msg.is_from(&user.id)));
        }
        self.root.set_visible_child_name("chat");
    }

    fn message_row(self: &Rc<Self>, msg: &Message, mine: bool) -> gtk::Box {
        let column = gtk::Box::new(gtk::Orientation::Vertical, 2);
        column.set_halign(if mine { gtk::Align::End } else { gtk::Align::Start });

        let bubble = gtk::Box::new(gtk::Orientation::Vertical, 2);
        bubble.add_css_class("card");
        if mine {
            bubble.add_css_class("accent");
        }
        let text = gtk::Label::new(Some(&msg.text));
        text.set_wrap(true);
        text.set_max_width_chars(48);
        text.set_xalign(0.0);
        crate::ui::pad(&text, 8);
        bubble.append(&text);

        let footer = gtk::Box::new(gtk::Orientation::Horizontal, 4);
        footer.set_margin_start(8);
        footer.set_margin_end(8);
        footer.set_margin_bottom(4);
        let time = gtk::Label::new(Some(&msg.timestamp));
        time.add_css_class("caption");
        time.add_css_class("dim-label");
        footer.append(&time);
        if msg.is_favorite {
            footer.append(&gtk::Label::new(Some("★")));
        }
        bubble.append(&footer);
        column.append(&bubble);

        if !msg.reactions.is_empty() {
            let tallies = gtk::Box::new(gtk::Orientation::Horizontal, 4);
            for reaction in &msg.reactions {
                let chip = gtk::Label::new(Some(&format!("{} {}", reaction.emoji, reaction.count)));
                chip.add_css_class("caption");
                tallies.append(&chip);
            }
            column.append(&tallies);
        }

        // Reaction picker and favorite star
        let actions = gtk::Box::new(gtk::Orientation::Horizontal, 2);
        actions.set_halign(if mine { gtk::Align::End } else { gtk::Align::Start });
        let picker = gtk::Box::new(gtk::Orientation::Horizontal, 2);
        let popover = gtk::Popover::new();
        for emoji in REACTION_EMOJIS {
            let btn = gtk::Button::with_label(emoji);
            btn.add_css_class("flat");
            let weak = Rc::downgrade(self);
            let popover = popover.clone();
            let message_id = msg.id.clone();
            btn.connect_clicked(move |_| {
                popover.popdown();
                if let Some(view) = weak.upgrade() {
                    view.react(&message_id, emoji);
                }
            });
            picker.append(&btn);
        }
        popover.set_child(Some(&picker));
        let react_btn = gtk::MenuButton::new();
        react_btn.set_icon_name("face-smile-symbolic");
        react_btn.add_css_class("flat");
        react_btn.set_popover(Some(&popover));
        actions.append(&react_btn);

        let star_btn = gtk::Button::from_icon_name(if msg.is_favorite {
            "starred-symbolic"
        } else {
            "non-starred-symbolic"
        });
        star_btn.add_css_class("flat");
        {
            let weak = Rc::downgrade(self);
            let message_id = msg.id.clone();
            star_btn.connect_clicked(move |_| {
                if let Some(view) = weak.upgrade() {
                    view.toggle_favorite(&message_id);
                }
            });
        }
        actions.append(&star_btn);
        column.append(&actions);

        column
    }
}
