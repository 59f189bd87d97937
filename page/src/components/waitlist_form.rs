//! Email capture: the local mock form and the hosted third-party embed.

use gamerie_core::FormMode;
use gamerie_core::config::HostedForm as HostedFormConfig;
use gamerie_core::content::SPOTS_REMAINING;
use gamerie_core::waitlist::JOIN_LABEL;
use leptos::prelude::*;

use super::{ICON_CHECK, ICON_LIGHTNING, Icon};
use crate::browser;
use crate::context::PageContext;

// Globals the hosted form script reads on load.
const HOSTED_FORM_GLOBALS: &str = r#"
window.REQUIRED_CODE_ERROR_MESSAGE = 'Please choose a country code';
window.LOCALE = 'en';
window.EMAIL_INVALID_MESSAGE = window.SMS_INVALID_MESSAGE = "The information provided is invalid. Please review the field format and try again.";
window.REQUIRED_ERROR_MESSAGE = "This field cannot be left blank. ";
window.GENERIC_INVALID_MESSAGE = "The information provided is invalid. Please review the field format and try again.";
window.translation = { common: { selectedList: '{quantity} list selected', selectedLists: '{quantity} lists selected' } };
var AUTOHIDE = Boolean(0);
"#;

/// Whichever form the site is configured for.
#[component]
pub fn WaitlistSlot(
    ctx: PageContext,
    placeholder: &'static str,
    /// Show the spots-remaining line while no notice is up
    #[prop(default = false)]
    show_spots: bool,
) -> impl IntoView {
    match ctx.form.get_value() {
        FormMode::Mock => {
            view! { <WaitlistForm ctx=ctx placeholder=placeholder show_spots=show_spots /> }
                .into_any()
        }
        FormMode::Hosted(form) => view! { <HostedForm form=form /> }.into_any(),
    }
}

/// Mock form: idle → pending ("Joining...", button disabled) → idle with a
/// success notice that disappears on its own.
#[component]
pub fn WaitlistForm(
    ctx: PageContext,
    placeholder: &'static str,
    #[prop(default = false)] show_spots: bool,
) -> impl IntoView {
    let pending = move || ctx.waitlist.with(|w| w.snapshot().is_pending());
    let label = move || ctx.waitlist.with(|w| w.snapshot().button_label());
    let input = move || ctx.waitlist.with(|w| w.input().to_string());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        browser::submit(ctx);
    };
    let on_input = move |ev| {
        let value = event_target_value(&ev);
        ctx.waitlist.update(|w| w.set_input(value));
    };

    view! {
        <div class="waitlist">
            <form class="waitlist-form" on:submit=on_submit>
                <input
                    type="email"
                    name="email"
                    class="waitlist-input"
                    placeholder=placeholder
                    aria-label="Email address"
                    value=input
                    prop:value=input
                    on:input=on_input
                />
                <button type="submit" class="btn btn-primary" disabled=pending>
                    <Icon path=ICON_LIGHTNING size="18" />
                    <span>{label}</span>
                </button>
            </form>
            {move || {
                let notice = ctx.waitlist.with(|w| w.notice().map(|n| n.text.clone()));
                match notice {
                    Some(text) => view! {
                        <p class="notice" role="status">
                            <Icon path=ICON_CHECK size="16" />
                            {format!("✓ {text}")}
                        </p>
                    }.into_any(),
                    None if show_spots => view! { <p class="spots">{SPOTS_REMAINING}</p> }.into_any(),
                    None => view! { "" }.into_any(),
                }
            }}
        </div>
    }
}

/// Plain POST form plus the vendor scripts. The vendor handles validation
/// and submission; nothing local runs.
#[component]
pub fn HostedForm(form: HostedFormConfig) -> impl IntoView {
    let HostedFormConfig {
        action,
        scripts,
        button_label,
        placeholder,
    } = form;
    let label = if button_label.is_empty() { JOIN_LABEL.to_string() } else { button_label };

    view! {
        <div class="waitlist sib-form">
            <form id="sib-form" class="waitlist-form" method="POST" action=action data-type="subscription">
                <input
                    type="email"
                    id="EMAIL"
                    name="EMAIL"
                    class="waitlist-input"
                    placeholder=placeholder
                    autocomplete="off"
                    data-required="true"
                    required=true
                />
                <input type="text" name="email_address_check" value="" class="input--hidden" />
                <input type="hidden" name="locale" value="en" />
                <button type="submit" class="btn btn-primary" form="sib-form">
                    <Icon path=ICON_LIGHTNING size="18" />
                    <span>{label}</span>
                </button>
            </form>
            <script>{HOSTED_FORM_GLOBALS}</script>
            {scripts
                .into_iter()
                .map(|src| view! { <script src=src defer=true></script> })
                .collect::<Vec<_>>()}
        </div>
    }
}
