//! Footer: brand, legal links, social links, copyright.

use gamerie_core::SiteLinks;
use gamerie_core::content::BRAND;
use leptos::prelude::*;

#[component]
pub fn Footer(links: SiteLinks, year: i32) -> impl IntoView {
    let SiteLinks {
        terms,
        privacy,
        socials,
        ..
    } = links;

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-row">
                    <div class="brand">
                        <span class="brand-dot"></span>
                        <span class="brand-name">{BRAND}</span>
                    </div>
                    <nav class="footer-links">
                        <a href=terms target="_blank">"Terms"</a>
                        <a href=privacy target="_blank">"Privacy"</a>
                    </nav>
                    {(!socials.is_empty()).then(|| view! {
                        <nav class="footer-socials" aria-label="Social">
                            {socials
                                .into_iter()
                                .map(|social| view! {
                                    <a href=social.href target="_blank" rel="noreferrer">{social.name}</a>
                                })
                                .collect::<Vec<_>>()}
                        </nav>
                    })}
                </div>
                <div class="copyright">{format!("© {year} {BRAND}. All rights reserved.")}</div>
            </div>
        </footer>
    }
}
