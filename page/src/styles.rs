//! Stylesheet for the landing and thank-you pages.
//!
//! Colors come from the palette custom properties (`--neo`, `--acc`, ...)
//! set on the page root, so the stylesheet itself never hardcodes the brand.
//!
//! ```rust
//! use gamerie_page::styles::PAGE_CSS;
//!
//! let themed = format!("{PAGE_CSS}\n.hero {{ min-height: 80vh; }}");
//! assert!(themed.contains(".hero"));
//! ```

/// Complete CSS for both pages. Inlined into `<head>` by the static render
/// and injected at startup by the browser build.
pub const PAGE_CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }

html { scroll-behavior: smooth; }

body {
    background: #000;
    color: #fff;
    font-family: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
    line-height: 1.5;
    -webkit-font-smoothing: antialiased;
    overflow-x: hidden;
}

a { color: inherit; text-decoration: none; }
h1, h2, h3 { letter-spacing: -0.02em; line-height: 1.1; }
h2 { font-size: clamp(2.25rem, 5vw, 3.75rem); font-weight: 700; margin-bottom: 1.5rem; }
h3 { font-size: 1.15rem; font-weight: 600; margin-bottom: 0.5rem; }

.page { position: relative; min-height: 100vh; }

.container { position: relative; z-index: 10; max-width: 72rem; margin: 0 auto; }
.container.narrow { max-width: 56rem; }
.center { text-align: center; }
.split { display: grid; gap: 4rem; align-items: center; }
.stack { display: flex; flex-direction: column; gap: 1rem; }

.gradient-text {
    background: linear-gradient(90deg, var(--neo), var(--acc), var(--neo));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
.accent { color: var(--neo); }
.muted { color: rgba(255, 255, 255, 0.6); font-size: 0.9rem; line-height: 1.6; }
.lead { color: rgba(255, 255, 255, 0.6); font-size: 1.25rem; line-height: 1.6; margin-bottom: 2rem; }
.display { font-size: clamp(3rem, 7vw, 4.5rem); font-weight: 700; margin-bottom: 1.5rem; }
.fine-print { margin-top: 1rem; font-size: 0.875rem; color: rgba(255, 255, 255, 0.4); }

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    height: 3rem;
    padding: 0 1.75rem;
    border: none;
    border-radius: 0.5rem;
    font: inherit;
    font-weight: 600;
    cursor: pointer;
    transition: background 0.2s, transform 0.2s, opacity 0.2s;
}
.btn-primary { background: var(--neo); color: #000; }
.btn-primary:hover { background: var(--acc); }
.btn-primary[disabled] { opacity: 0.6; cursor: wait; }
.btn-ghost { background: transparent; color: var(--neo); height: 2.75rem; }
.btn-ghost:hover { background: rgba(198, 163, 255, 0.1); }
.btn-lg { height: 3.5rem; padding: 0 2.5rem; }
.btn-discord { background: #5865F2; color: #fff; height: 3.5rem; padding: 0 2rem; }
.btn-discord:hover { background: #4752C4; transform: scale(1.05); }

.pill {
    display: inline-block;
    margin-bottom: 1.5rem;
    padding: 0.25rem 0.75rem;
    border: 1px solid rgba(198, 163, 255, 0.2);
    border-radius: 999px;
    background: rgba(198, 163, 255, 0.1);
    color: var(--neo);
    font-size: 0.875rem;
    font-weight: 500;
}

.card {
    position: relative;
    padding: 1.5rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1rem;
    background: rgba(255, 255, 255, 0.05);
    backdrop-filter: blur(4px);
    transition: border-color 0.3s, background 0.3s, transform 0.3s;
}
.card:hover { border-color: rgba(198, 163, 255, 0.4); background: rgba(255, 255, 255, 0.07); transform: translateY(-4px); }

/* Sections and backdrops */
.section { position: relative; padding: 8rem 1.5rem; overflow: hidden; }
.section-header { text-align: center; margin-bottom: 4rem; }
.section-header .lead { max-width: 48rem; margin-left: auto; margin-right: auto; }

.backdrop { position: absolute; inset: 0; z-index: 0; pointer-events: none; }
.divider {
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    height: 1px;
    background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.1), transparent);
}
.grid-overlay { position: absolute; inset: 0; background-image: url('/grid.svg'); opacity: 0.04; mix-blend-mode: overlay; }
.glow-pulse {
    position: absolute;
    top: 50%;
    left: 50%;
    width: 30rem;
    height: 30rem;
    transform: translate(-50%, -50%);
    border-radius: 50%;
    background: radial-gradient(circle, rgba(255, 255, 255, 0.05) 0%, transparent 70%);
    animation: pulse 6s ease-in-out infinite;
}
.spotlight {
    position: absolute;
    top: 33%;
    left: 50%;
    width: 50rem;
    height: 25rem;
    transform: translateX(-50%);
    border-radius: 50%;
    background: rgba(198, 163, 255, 0.05);
    filter: blur(64px);
}
.spotlight-low { top: auto; bottom: 8rem; }

.orb { position: absolute; width: 14rem; height: 14rem; border-radius: 50%; filter: blur(64px); will-change: transform; }
.orb-lg { width: 18rem; height: 18rem; }
.orb-xl { width: 24rem; height: 24rem; }
.orb-neon { background: rgba(198, 163, 255, 0.2); }
.orb-accent { background: rgba(158, 131, 200, 0.2); }
.orb-top-left { top: 5rem; left: -5rem; }
.orb-top-right { top: 5rem; right: -5rem; }
.orb-bottom-left { bottom: 5rem; left: -5rem; }
.orb-bottom-right { bottom: 5rem; right: -5rem; }

/* Hero */
.hero {
    position: relative;
    display: flex;
    min-height: 100vh;
    align-items: center;
    justify-content: center;
    padding: 6rem 1.5rem;
    overflow: hidden;
    text-align: center;
}
.hero-slides { position: absolute; inset: 0; }
.hero-slide {
    position: absolute;
    inset: 0;
    background-size: cover;
    background-position: center;
    opacity: 0;
    transform: scale(1.05);
    transition: opacity 1.5s ease, transform 6s ease;
}
.hero-slide.active { opacity: 1; transform: scale(1); }
.hero-overlay { position: absolute; inset: 0; background: linear-gradient(180deg, rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.85) 70%, #000); }
.hero-content { position: relative; z-index: 10; max-width: 56rem; will-change: transform, opacity; }
.hero-title { font-size: clamp(3rem, 8vw, 5.5rem); font-weight: 800; margin-bottom: 1.5rem; }
.hero-subtext { max-width: 40rem; margin: 0 auto 2.5rem; font-size: 1.25rem; color: rgba(255, 255, 255, 0.7); }

.badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 2rem;
    padding: 0.4rem 1rem;
    border: 1px solid rgba(198, 163, 255, 0.3);
    border-radius: 999px;
    background: rgba(198, 163, 255, 0.1);
    font-size: 0.875rem;
    font-variant-numeric: tabular-nums;
}
.badge-dot { width: 0.5rem; height: 0.5rem; border-radius: 50%; background: var(--neo); animation: pulse 2s ease-in-out infinite; }

.scroll-indicator {
    position: absolute;
    bottom: 2.5rem;
    left: 50%;
    width: 1.5rem;
    height: 2.5rem;
    transform: translateX(-50%);
    border: 2px solid rgba(255, 255, 255, 0.2);
    border-radius: 999px;
}
.scroll-dot { width: 0.25rem; height: 0.5rem; margin: 0.5rem auto 0; border-radius: 999px; background: rgba(255, 255, 255, 0.6); animation: scroll-dot 1.5s ease-in-out infinite; }

/* Waitlist form */
.waitlist { max-width: 36rem; margin: 0 auto 1.5rem; }
.waitlist-form { display: flex; flex-direction: column; gap: 0.75rem; }
.waitlist-input {
    flex: 1;
    height: 3rem;
    padding: 0 1rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 0.5rem;
    background: rgba(255, 255, 255, 0.05);
    color: #fff;
    font: inherit;
}
.waitlist-input:focus { outline: 1px solid var(--neo); }
.notice { display: inline-flex; align-items: center; gap: 0.4rem; margin-top: 1rem; font-size: 0.875rem; color: var(--neo); animation: fade-in 0.3s ease; }
.spots { margin-top: 1rem; font-size: 0.875rem; color: rgba(255, 255, 255, 0.4); }
.input--hidden { display: none; }

/* Grids */
.stat-grid, .role-grid, .perk-grid, .testimonial-grid, .feature-grid { display: grid; gap: 1.5rem; }
.stat-card { text-align: center; }
.stat-value { font-size: 3rem; font-weight: 700; color: var(--neo); }
.stat-label { font-weight: 600; }
.stat-desc { font-size: 0.875rem; color: rgba(255, 255, 255, 0.5); }
.problem-card { display: flex; align-items: center; gap: 1.5rem; }

.demo-frame {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    aspect-ratio: 4 / 3;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1rem;
    background: radial-gradient(circle at 50% 50%, rgba(198, 163, 255, 0.1), transparent 60%);
}
.demo-icon {
    display: flex;
    width: 5rem;
    height: 5rem;
    margin-bottom: 1rem;
    align-items: center;
    justify-content: center;
    border-radius: 1rem;
    background: linear-gradient(135deg, var(--neo), var(--acc));
    color: #000;
}
.feature { display: flex; gap: 1rem; align-items: flex-start; }
.feature-icon { font-size: 2rem; line-height: 1; margin-bottom: 0.75rem; }
.feature-grid { margin-bottom: 2.5rem; }

.role-card { padding: 0; overflow: hidden; }
.role-card h3, .role-card p { padding: 0 1.5rem; }
.role-card p { padding-bottom: 1.5rem; }
.role-image { height: 11rem; margin-bottom: 1.25rem; background-size: cover; background-position: center; }
.partner-card { display: flex; flex-direction: column; align-items: center; gap: 1.5rem; max-width: 56rem; margin: 5rem auto 3rem; padding: 2rem; }
.partner-mark { font-size: 3.75rem; font-weight: 700; color: var(--neo); }

.testimonial { display: flex; flex-direction: column; justify-content: space-between; min-height: 25rem; border-top: 3px solid rgba(198, 163, 255, 0.5); }
.testimonial blockquote { font-size: 1.1rem; line-height: 1.7; color: rgba(255, 255, 255, 0.9); }
.testimonial figcaption { display: flex; flex-direction: column; margin-top: 1.5rem; font-size: 0.875rem; }
.quote-mark { position: absolute; top: 1rem; left: 1rem; font-size: 3rem; opacity: 0.1; color: var(--neo); }
.author { color: rgba(255, 255, 255, 0.6); }
.location { color: rgba(255, 255, 255, 0.7); }

/* FAQ */
.faq-list { display: flex; flex-direction: column; gap: 1rem; }
.faq-item {
    overflow: hidden;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1rem;
    background: rgba(255, 255, 255, 0.05);
    transition: border-color 0.3s, box-shadow 0.3s;
}
.faq-item:hover { border-color: rgba(198, 163, 255, 0.4); box-shadow: 0 0 25px -5px var(--neo); }
.faq-question {
    display: flex;
    width: 100%;
    align-items: center;
    justify-content: space-between;
    padding: 1.25rem 1.5rem;
    border: none;
    background: none;
    color: inherit;
    font: inherit;
    text-align: left;
    cursor: pointer;
}
.faq-question h3 { margin: 0; padding-right: 1rem; }
.faq-caret { flex-shrink: 0; color: var(--neo); transition: transform 0.3s; }
.faq-answer {
    max-height: 0;
    padding: 0 1.5rem;
    opacity: 0;
    overflow: hidden;
    color: rgba(255, 255, 255, 0.7);
    line-height: 1.7;
    transition: max-height 0.3s ease-in-out, opacity 0.3s ease-in-out, padding 0.3s;
}
.faq-answer p + p { margin-top: 0.75rem; }
.faq-item.open .faq-answer { max-height: 40rem; padding-bottom: 1.25rem; opacity: 1; }
.faq-item.open .faq-caret { transform: rotate(180deg); }

/* Call to action */
.discord-link { display: inline-flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; color: rgba(255, 255, 255, 0.6); }
.discord-link:hover { color: #fff; }

/* Footer */
.footer { position: relative; padding: 3rem 1.5rem; border-top: 1px solid rgba(255, 255, 255, 0.1); }
.footer-row { display: flex; flex-direction: column; align-items: center; justify-content: space-between; gap: 2rem; margin-bottom: 2rem; }
.brand { display: flex; align-items: center; gap: 0.5rem; }
.brand-dot { width: 0.375rem; height: 0.375rem; border-radius: 50%; background: var(--neo); }
.brand-name { font-size: 1.25rem; font-weight: 700; }
.footer-links, .footer-socials { display: flex; gap: 2rem; font-size: 0.875rem; }
.footer-links a, .footer-socials a { color: rgba(255, 255, 255, 0.6); transition: color 0.2s; }
.footer-links a:hover, .footer-socials a:hover { color: #fff; }
.copyright { font-size: 0.875rem; color: rgba(255, 255, 255, 0.4); text-align: center; }

/* Thank-you page */
.thank-you { position: relative; display: flex; min-height: 100vh; align-items: center; padding: 6rem 1.5rem; overflow: hidden; }
.particles { position: absolute; inset: 0; }
.particle { position: absolute; width: 4px; height: 4px; border-radius: 50%; background: var(--neo); opacity: 0; animation: float-up ease-in-out infinite; }
.success-badge { display: inline-flex; margin-bottom: 2rem; color: var(--neo); filter: drop-shadow(0 0 30px rgba(198, 163, 255, 0.5)); animation: pop-in 0.6s ease; }
.email-card { display: flex; align-items: flex-start; gap: 1rem; max-width: 42rem; margin: 0 auto 3rem; text-align: left; }
.discord-card { padding: 3rem 2rem; border-radius: 1.5rem; }
.back-home { display: inline-flex; align-items: center; gap: 0.5rem; margin-top: 3rem; color: rgba(255, 255, 255, 0.6); }
.back-home:hover { color: #fff; }

@keyframes pulse { 0%, 100% { opacity: 0.15; } 50% { opacity: 0.3; } }
@keyframes scroll-dot { 0% { transform: translateY(0); opacity: 1; } 100% { transform: translateY(12px); opacity: 0; } }
@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
@keyframes pop-in { from { transform: scale(0); } to { transform: scale(1); } }
@keyframes float-up {
    0% { transform: translateY(0); opacity: 0; }
    50% { opacity: 1; }
    100% { transform: translateY(-100px); opacity: 0; }
}

@media (min-width: 640px) {
    .waitlist-form { flex-direction: row; }
    .stat-grid, .role-grid, .perk-grid, .testimonial-grid, .feature-grid { grid-template-columns: repeat(2, 1fr); }
    .footer-row { flex-direction: row; }
    .copyright { text-align: left; }
}

@media (min-width: 1024px) {
    .split { grid-template-columns: 1fr 1fr; }
    .stat-grid, .role-grid { grid-template-columns: repeat(4, 1fr); }
    .perk-grid, .testimonial-grid { grid-template-columns: repeat(3, 1fr); }
    .partner-card { flex-direction: row; text-align: left; }
}

@media (prefers-reduced-motion: reduce) {
    *, *::before, *::after { animation: none; transition: none; }
    html { scroll-behavior: auto; }
}
"#;
