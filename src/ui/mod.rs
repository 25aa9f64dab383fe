//! Server-rendered admin portal pages

mod layout;
pub mod handlers;

pub use handlers::{
    applications_page, approve_application_form, chat_page, chat_send_form, citizens_page,
    complaint_reply_form, complaint_resolve_form, complaints_page, dashboard, login_page,
    login_submit, logout_submit, not_found, notifications_read_all_form, profile_page,
    profile_password_form, reject_application_form, save_general_settings,
    save_security_settings, settings_page,
};
