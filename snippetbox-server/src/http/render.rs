//! HTML pages
//!
//! Pages are a base layout, the nav partial, and a page body, built with
//! maud. Every spliced value is escaped by the macro.

use maud::{html, Markup, DOCTYPE};

use crate::models::Snippet;

fn base(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) " - Snippetbox" }
                link rel="stylesheet" href="/static/css/main.css";
            }
            body {
                header {
                    h1 { a href="/" { "Snippetbox" } }
                }
                (nav())
                main { (content) }
                footer {
                    "Powered by "
                    a href="https://www.rust-lang.org/" { "Rust" }
                }
            }
        }
    }
}

fn nav() -> Markup {
    html! {
        nav {
            a href="/" { "Home" }
        }
    }
}

/// Home page listing the latest live snippets.
pub fn home_page(snippets: &[Snippet]) -> Markup {
    let content = html! {
        h2 { "Latest Snippets" }
        @if snippets.is_empty() {
            p { "There's nothing to see here yet!" }
        } @else {
            table {
                tr {
                    th { "Title" }
                    th { "Created" }
                    th { "ID" }
                }
                @for snippet in snippets {
                    tr {
                        td {
                            a href={ "/snippet/view?id=" (snippet.id().get()) } {
                                (snippet.title())
                            }
                        }
                        td { (snippet.created().format("%d %b %Y at %H:%M").to_string()) }
                        td { "#" (snippet.id().get()) }
                    }
                }
            }
        }
    };

    base("Home", content)
}
