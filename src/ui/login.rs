use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use adw::prelude::*;
use cheesehome::auth::{AuthFlow, AuthStep, CodeOutcome};
use gtk4 as gtk;
use log::info;

use crate::app::AppContext;

pub fn show_login_window(ctx: &Rc<AppContext>) {
    let window = adw::ApplicationWindow::builder()
        .application(&ctx.app)
        .title("CheeseHome")
        .default_width(420)
        .default_height(340)
        .resizable(false)
        .build();

    let flow = Rc::new(RefCell::new(AuthFlow::new(ctx.config.code_length)));

    let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
    crate::ui::pad(&root, 24);

    let logo = crate::ui::avatar_label("🧀", "title-1");
    root.append(&logo);

    let title = gtk::Label::new(Some("CheeseHome"));
    title.add_css_class("title-2");
    root.append(&title);

    let hint = gtk::Label::new(Some("Enter your email to sign in"));
    hint.add_css_class("dim-label");
    root.append(&hint);

    // One page per step
    let steps = gtk::Stack::new();
    steps.set_transition_type(gtk::StackTransitionType::SlideLeftRight);

    let address_page = gtk::Box::new(gtk::Orientation::Vertical, 8);
    let address_entry = gtk::Entry::new();
    address_entry.set_placeholder_text(Some("your@email.com"));
    address_entry.set_input_purpose(gtk::InputPurpose::Email);
    address_entry.set_hexpand(true);
    let request_btn = gtk::Button::with_label("Get code");
    request_btn.add_css_class("suggested-action");
    request_btn.set_sensitive(false);
    address_page.append(&address_entry);
    address_page.append(&request_btn);
    steps.add_named(&address_page, Some("address"));

    let code_page = gtk::Box::new(gtk::Orientation::Vertical, 8);
    let code_entry = gtk::Entry::new();
    code_entry.set_max_length(i32::try_from(flow.borrow().code_length()).unwrap_or(i32::MAX));
    code_entry.set_placeholder_text(Some(&"•".repeat(flow.borrow().code_length())));
    code_entry.set_input_purpose(gtk::InputPurpose::Digits);
    code_entry.set_alignment(0.5);
    code_entry.add_css_class("title-3");
    let status = gtk::Label::new(None);
    status.add_css_class("dim-label");
    let back_btn = gtk::Button::with_label("Change email");
    back_btn.add_css_class("flat");
    code_page.append(&code_entry);
    code_page.append(&status);
    code_page.append(&back_btn);
    steps.add_named(&code_page, Some("code"));

    root.append(&steps);

    let container = gtk::Box::new(gtk::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    header.set_title_widget(Some(&gtk::Label::new(Some("Sign in"))));
    container.append(&header);
    container.append(&root);
    window.set_content(Some(&container));

    // Submit stays disabled until the address looks like one
    {
        let flow = flow.clone();
        let request_btn = request_btn.clone();
        address_entry.connect_changed(move |entry| {
            let mut flow = flow.borrow_mut();
            flow.set_address(&entry.text());
            request_btn.set_sensitive(flow.can_request_code());
        });
    }

    let on_request: Rc<dyn Fn()> = {
        let flow = flow.clone();
        let steps = steps.clone();
        let hint = hint.clone();
        let code_entry = code_entry.clone();
        Rc::new(move || {
            if !flow.borrow_mut().request_code() {
                return;
            }
            if let AuthStep::Code { address } = flow.borrow().step() {
                hint.set_label(&format!("Enter the code sent to {address}"));
            }
            steps.set_visible_child_name("code");
            code_entry.grab_focus();
        })
    };
    {
        let on_request = on_request.clone();
        request_btn.connect_clicked(move |_| (on_request)());
    }
    {
        let on_request = on_request.clone();
        address_entry.connect_activate(move |_| (on_request)());
    }

    {
        let flow = flow.clone();
        let ctx = ctx.clone();
        let window = window.clone();
        let status = status.clone();
        let back_btn = back_btn.clone();
        code_entry.connect_changed(move |entry| {
            let outcome = flow.borrow_mut().enter_code(&entry.text());
            let CodeOutcome::Accepted { address } = outcome else {
                return;
            };
            status.set_label("Verifying…");
            entry.set_sensitive(false);
            back_btn.set_sensitive(false);

            let ctx = ctx.clone();
            let window = window.clone();
            let delay = Duration::from_millis(ctx.config.verification_delay_ms);
            glib::timeout_add_local_once(delay, move || {
                let signed_in = ctx.client.borrow_mut().authenticate(&address).is_some();
                if signed_in {
                    info!("Code accepted for {address}");
                    crate::ui::main_window::show_main_window(&ctx);
                    window.close();
                }
            });
        });
    }

    {
        let flow = flow.clone();
        let steps = steps.clone();
        let hint = hint.clone();
        let code_entry = code_entry.clone();
        back_btn.connect_clicked(move |_| {
            flow.borrow_mut().change_address();
            code_entry.set_text("");
            hint.set_label("Enter your email to sign in");
            steps.set_visible_child_name("address");
        });
    }

    window.present();
    address_entry.grab_focus();
}
