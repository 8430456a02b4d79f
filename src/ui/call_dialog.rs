use std::rc::Rc;

use adw::prelude::*;
use cheesehome::api::events::Action;
use cheesehome::router::{CallControls, CallKind};
use gtk4 as gtk;

use crate::app::AppContext;

fn mic_icon(controls: CallControls) -> &'static str {
    if controls.muted {
        "microphone-disabled-symbolic"
    } else {
        "microphone-sensitive-symbolic"
    }
}

fn camera_icon(controls: CallControls) -> &'static str {
    if controls.camera_off {
        "camera-disabled-symbolic"
    } else {
        "camera-video-symbolic"
    }
}

fn round_button(icon: &str) -> gtk::Button {
    let btn = gtk::Button::from_icon_name(icon);
    btn.add_css_class("circular");
    btn.set_size_request(56, 56);
    btn
}

/// Toggles `action` and returns the controls afterwards.
fn toggle(ctx: &AppContext, kind: CallKind, action: Action) -> CallControls {
    let mut client = ctx.client.borrow_mut();
    client.dispatch(action);
    client.router().call_controls(kind)
}

/// Opens the call overlay for the selected conversation. Closing the
/// window in any way hangs up.
pub fn show_call_dialog(ctx: &Rc<AppContext>, parent: &adw::ApplicationWindow, kind: CallKind) {
    let (name, avatar, controls) = {
        let mut client = ctx.client.borrow_mut();
        let Some(conv) = client.selected_conversation() else {
            return;
        };
        let peer = (conv.name.clone(), conv.avatar.clone());
        client.dispatch(Action::OpenCall(kind));
        (peer.0, peer.1, client.router().call_controls(kind))
    };

    let (title, width, height) = match kind {
        CallKind::Audio => ("Audio call", 360, 420),
        CallKind::Video => ("Video call", 720, 520),
    };
    let window = gtk::Window::builder()
        .transient_for(parent)
        .modal(true)
        .title(title)
        .default_width(width)
        .default_height(height)
        .build();

    let root = gtk::Box::new(gtk::Orientation::Vertical, 18);
    crate::ui::pad(&root, 24);
    root.set_valign(gtk::Align::Center);

    let overlay_badge = gtk::Label::new(Some("Screen sharing"));
    overlay_badge.add_css_class("accent");
    overlay_badge.set_visible(controls.screen_sharing);
    if kind == CallKind::Video {
        root.append(&overlay_badge);
    }

    root.append(&crate::ui::avatar_label(&avatar, "title-1"));
    let name_label = gtk::Label::new(Some(&name));
    name_label.add_css_class("title-2");
    root.append(&name_label);
    let kind_label = gtk::Label::new(Some(title));
    kind_label.add_css_class("dim-label");
    root.append(&kind_label);

    let buttons = gtk::Box::new(gtk::Orientation::Horizontal, 12);
    buttons.set_halign(gtk::Align::Center);

    let mute_btn = round_button(mic_icon(controls));
    {
        let ctx = ctx.clone();
        mute_btn.connect_clicked(move |btn| {
            let controls = toggle(&ctx, kind, Action::ToggleMute(kind));
            btn.set_icon_name(mic_icon(controls));
        });
    }
    buttons.append(&mute_btn);

    if kind == CallKind::Video {
        let camera_btn = round_button(camera_icon(controls));
        {
            let ctx = ctx.clone();
            camera_btn.connect_clicked(move |btn| {
                let controls = toggle(&ctx, kind, Action::ToggleCamera);
                btn.set_icon_name(camera_icon(controls));
            });
        }
        buttons.append(&camera_btn);

        let share_btn = round_button("video-display-symbolic");
        {
            let ctx = ctx.clone();
            let overlay_badge = overlay_badge.clone();
            share_btn.connect_clicked(move |_| {
                let controls = toggle(&ctx, kind, Action::ToggleScreenShare);
                overlay_badge.set_visible(controls.screen_sharing);
            });
        }
        buttons.append(&share_btn);
    }

    let hangup_btn = round_button("call-stop-symbolic");
    hangup_btn.add_css_class("destructive-action");
    {
        let window = window.clone();
        hangup_btn.connect_clicked(move |_| window.close());
    }
    buttons.append(&hangup_btn);
    root.append(&buttons);

    {
        let ctx = ctx.clone();
        window.connect_close_request(move |_| {
            ctx.client.borrow_mut().dispatch(Action::CloseCall(kind));
            glib::Propagation::Proceed
        });
    }

    window.set_child(Some(&root));
    window.present();
}
