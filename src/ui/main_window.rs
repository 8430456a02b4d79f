use std::rc::Rc;

use adw::prelude::*;
use cheesehome::api::events::Action;
use cheesehome::router::{SidePane, Tab};
use gtk4 as gtk;
use log::debug;

use crate::app::AppContext;
use crate::ui::chat_view::ChatView;
use crate::ui::contacts::ContactsPanel;
use crate::ui::favorites::FavoritesPanel;
use crate::ui::groups::GroupsPanel;
use crate::ui::profile_panel::ProfilePanel;
use crate::ui::sidebar::Sidebar;

fn settings_placeholder() -> gtk::Widget {
    let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
    crate::ui::pad(&root, 16);
    let title = gtk::Label::new(Some("Settings"));
    title.add_css_class("title-4");
    title.set_halign(gtk::Align::Start);
    let hint = gtk::Label::new(Some("This section is under construction"));
    hint.add_css_class("dim-label");
    hint.set_halign(gtk::Align::Start);
    root.append(&title);
    root.append(&hint);
    root.upcast()
}

fn show_side_pane(side: &gtk::Stack, pane: SidePane) {
    side.set_visible_child_name(match pane {
        SidePane::Profile => "profile",
        SidePane::Tab(_) => "tabs",
    });
}

pub fn show_main_window(ctx: &Rc<AppContext>) {
    let window = adw::ApplicationWindow::builder()
        .application(&ctx.app)
        .title("CheeseHome")
        .default_width(ctx.config.window_width)
        .default_height(ctx.config.window_height)
        .build();

    let split = adw::Flap::builder()
        .reveal_flap(true)
        .locked(true)
        .modal(false)
        .build();

    // Left column: five tabs, or the profile panel in their place
    let sidebar = Sidebar::new(ctx);
    let contacts = ContactsPanel::new(ctx);
    let groups = GroupsPanel::new(ctx);
    let favorites = FavoritesPanel::new(ctx);
    let profile = ProfilePanel::new(ctx);

    let tabs = gtk::Stack::new();
    tabs.set_vexpand(true);
    for tab in Tab::ALL {
        let child = match tab {
            Tab::Chats => sidebar.widget(),
            Tab::Contacts => contacts.widget(),
            Tab::Groups => groups.widget(),
            Tab::Favorites => favorites.widget(),
            Tab::Settings => settings_placeholder(),
        };
        let page = tabs.add_titled(&child, Some(tab.key()), tab.title());
        page.set_icon_name(tab.icon_name());
    }
    let switcher = gtk::StackSwitcher::new();
    switcher.set_stack(Some(&tabs));
    switcher.set_halign(gtk::Align::Center);

    let tabs_box = gtk::Box::new(gtk::Orientation::Vertical, 0);
    tabs_box.set_size_request(360, -1);
    tabs_box.append(&switcher);
    tabs_box.append(&tabs);

    let side = gtk::Stack::new();
    side.set_transition_type(gtk::StackTransitionType::Crossfade);
    side.add_named(&tabs_box, Some("tabs"));
    side.add_named(&profile.widget(), Some("profile"));
    split.set_flap(Some(&side));

    let chat = ChatView::new(ctx);
    split.set_content(Some(&chat.widget()));

    let container = gtk::Box::new(gtk::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let title = gtk::Label::new(Some("🧀 CheeseHome"));
    title.add_css_class("title-3");
    header.set_title_widget(Some(&title));

    let avatar = ctx
        .client
        .borrow()
        .current_user()
        .map(|u| u.avatar_or_default().to_string())
        .unwrap_or_default();
    let profile_btn = gtk::Button::with_label(&avatar);
    profile_btn.add_css_class("flat");
    profile_btn.set_tooltip_text(Some("Profile"));
    header.pack_end(&profile_btn);
    container.append(&header);
    container.append(&split);
    window.set_content(Some(&container));

    {
        let ctx = ctx.clone();
        let favorites = favorites.clone();
        tabs.connect_visible_child_name_notify(move |stack| {
            let Some(tab) = stack.visible_child_name().and_then(|name| Tab::from_key(&name)) else {
                return;
            };
            debug!("Switched to {}", tab.title());
            ctx.client.borrow_mut().dispatch(Action::SelectTab(tab));
            if tab == Tab::Favorites {
                favorites.refresh();
            }
        });
    }

    {
        let ctx = ctx.clone();
        let chat = chat.clone();
        sidebar.connect_selected(move |id| {
            ctx.client
                .borrow_mut()
                .dispatch(Action::SelectConversation(id.to_string()));
            chat.refresh();
        });
    }

    {
        let sidebar = sidebar.clone();
        let favorites = favorites.clone();
        chat.connect_changed(move || {
            sidebar.refresh();
            favorites.refresh();
        });
    }

    {
        let ctx = ctx.clone();
        let window = window.clone();
        chat.connect_call(move |kind| {
            crate::ui::call_dialog::show_call_dialog(&ctx, &window, kind);
        });
    }

    {
        let ctx = ctx.clone();
        let side = side.clone();
        let profile = profile.clone();
        profile_btn.connect_clicked(move |_| {
            let pane = {
                let mut client = ctx.client.borrow_mut();
                client.dispatch(Action::ToggleProfile);
                client.router().side_pane()
            };
            if pane == SidePane::Profile {
                profile.load();
                show_side_pane(&side, pane);
            } else {
                // Closing through the header button saves like the back button does
                profile.close();
            }
        });
    }

    {
        let ctx = ctx.clone();
        let side = side.clone();
        let profile_btn = profile_btn.clone();
        profile.connect_close(move || {
            let pane = {
                let mut client = ctx.client.borrow_mut();
                client.dispatch(Action::CloseProfile);
                client.router().side_pane()
            };
            if let Some(user) = ctx.client.borrow().current_user() {
                profile_btn.set_label(user.avatar_or_default());
            }
            show_side_pane(&side, pane);
        });
    }

    {
        let ctx = ctx.clone();
        let window = window.clone();
        profile.connect_logout(move || {
            crate::ui::login::show_login_window(&ctx);
            window.close();
        });
    }

    window.present();
}
