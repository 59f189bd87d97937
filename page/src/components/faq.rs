//! FAQ accordion. Every answer is in the markup; only open items show it.

use gamerie_core::content::FAQ;
use gamerie_core::motion::OrbDrift;
use gamerie_core::{AnswerBlock, FaqEntry};
use leptos::html;
use leptos::prelude::*;

use super::{ICON_CARET_DOWN, Icon, Orb, use_section_progress};
use crate::context::PageContext;

#[component]
pub fn Faq(ctx: PageContext) -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let progress = use_section_progress(ctx, section);

    view! {
        <section node_ref=section id="faq" class="section section-faq">
            <div class="backdrop">
                <Orb progress=progress drift=OrbDrift::slide(120.0) class="orb-top-left orb-neon" />
                <Orb progress=progress drift=OrbDrift::slide(-120.0) class="orb-bottom-right orb-accent" />
                <div class="spotlight"></div>
            </div>

            <div class="container narrow">
                <header class="section-header">
                    <h2>"Frequently Asked " <span class="gradient-text">"Questions"</span></h2>
                </header>

                <div class="faq-list">
                    {FAQ
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| view! { <FaqItem ctx=ctx index=index entry=*entry /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn FaqItem(ctx: PageContext, index: usize, entry: FaqEntry) -> impl IntoView {
    let open = move || ctx.faq.with(|faq| faq.is_open(index));
    let answer_id = format!("faq-answer-{index}");

    view! {
        <div class=move || if open() { "faq-item open" } else { "faq-item" }>
            <button
                type="button"
                class="faq-question"
                aria-expanded=move || open().to_string()
                aria-controls=answer_id.clone()
                on:click=move |_| ctx.toggle_faq(index)
            >
                <h3>{entry.question}</h3>
                <Icon path=ICON_CARET_DOWN class="faq-caret" />
            </button>
            <div id=answer_id class="faq-answer">
                {entry
                    .answer
                    .iter()
                    .map(|block| match *block {
                        AnswerBlock::Text(text) => view! { <p>{text}</p> }.into_any(),
                        AnswerBlock::Lead { label, text } => {
                            view! { <p><strong>{label}</strong> " " {text}</p> }.into_any()
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
