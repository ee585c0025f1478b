//! Server-rendered reading page.
//!
//! Minimal markup for the `/zodiac/:sign` page, built from the defaulted
//! [`ReadingView`]. Error states render a banner instead of the cards; the
//! page always renders something.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::horoscope::view::{ReadingView, SectionView};
use crate::models::sign::Sign;

const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:Inter,-apple-system,"Segoe UI",Roboto,sans-serif;background:#050510;color:#fff;min-height:100vh;padding:2rem 1rem}
main{max-width:680px;margin:0 auto}
h1{font-size:2.5rem;letter-spacing:-.02em}
.subtitle{color:#a78bfa;text-transform:uppercase;letter-spacing:.3em;font-size:.8rem;margin-bottom:1.5rem}
.theme{display:inline-block;border:1px solid rgba(255,255,255,.1);border-radius:999px;padding:.4rem 1rem;font-size:.9rem;margin-bottom:1.5rem}
.minis{display:grid;grid-template-columns:repeat(auto-fit,minmax(140px,1fr));gap:.75rem;margin-bottom:1.5rem}
.mini{background:rgba(255,255,255,.05);border:1px solid rgba(255,255,255,.1);border-radius:14px;padding:1rem}
.mini .label{font-size:.7rem;text-transform:uppercase;letter-spacing:.2em;color:rgba(255,255,255,.4);margin-bottom:.25rem}
.edge{border-color:rgba(168,85,247,.6)}
.card{background:rgba(255,255,255,.05);border:1px solid rgba(255,255,255,.1);border-radius:18px;padding:1.5rem;margin-bottom:1rem}
.card header{display:flex;justify-content:space-between;align-items:center;margin-bottom:.75rem}
.score{font-family:ui-monospace,monospace;font-weight:700;color:rgba(255,255,255,.5)}
.bar{height:6px;background:rgba(255,255,255,.08);border-radius:3px;overflow:hidden;margin-bottom:.75rem}
.bar-fill{height:100%;background:linear-gradient(90deg,#a855f7,#ec4899)}
.advice{margin-top:.75rem;border-left:2px solid rgba(255,255,255,.15);padding-left:.75rem;color:#cbd5e1}
.affirmation{font-style:italic;color:#e2e8f0;background:rgba(168,85,247,.12);border:1px solid rgba(255,255,255,.1);border-radius:18px;padding:1.25rem;margin-top:1rem}
.error{background:rgba(239,68,68,.1);border:1px solid rgba(239,68,68,.35);color:#fecaca;border-radius:14px;padding:1.25rem}
"#;

/// Renders a full reading page for a sign.
pub fn reading_page(sign: Sign, view: &ReadingView) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (sign.title()) " — StarPath Daily Reading" }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main {
                    h1 { (sign.title()) }
                    p.subtitle { "Daily Cosmic Reading" }
                    @if let Some(theme) = &view.theme {
                        div.theme { "Theme • " (theme) }
                    }
                    div.minis {
                        (mini_block("Daily Focus", &view.daily_focus))
                        (mini_block("Caution", &view.caution))
                        (mini_block("Luck Signals", &view.luck_signals))
                        @if let Some(edge) = &view.personal_edge {
                            div.mini.edge {
                                div.label { "Personal Edge" }
                                div { (edge) }
                            }
                        }
                    }
                    (section_card("Career", &view.career))
                    (section_card("Love", &view.love))
                    (section_card("Luck", &view.luck))
                    div.affirmation { "“" (view.affirmation) "”" }
                }
            }
        }
    }
}

/// Renders the page shell with an error banner instead of reading cards.
pub fn error_page(title: &str, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) " — StarPath Daily Reading" }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main {
                    h1 { (title) }
                    p.subtitle { "Daily Cosmic Reading" }
                    div.error { (message) }
                }
            }
        }
    }
}

fn mini_block(label: &str, value: &str) -> Markup {
    html! {
        div.mini {
            div.label { (label) }
            div { (value) }
        }
    }
}

fn section_card(title: &str, section: &SectionView) -> Markup {
    html! {
        div.card {
            header {
                h3 { (title) }
                span.score { (section.score) "%" }
            }
            div.bar {
                div.bar-fill style=(format!("width:{}%", section.score)) {}
            }
            p { (section.message) }
            @if !section.advice.is_empty() {
                div.advice { (section.advice) }
            }
        }
    }
}
