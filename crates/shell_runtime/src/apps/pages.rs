//! Static portfolio content panels mounted inside managed windows.

use leptos::*;

#[component]
pub(super) fn AboutPage() -> impl IntoView {
    view! {
        <article class="page page-about">
            <header class="page-header">
                <h1>"Hey, I'm Ayaz"</h1>
                <p class="page-subtitle">"Software engineer & tinkerer"</p>
            </header>
            <p>
                "I build things for the web, from tiny command-line utilities to "
                "full product frontends. This site is a small homage to the "
                "desktop operating systems I grew up with."
            </p>
            <p>
                "Double-click the icons or use the dock to explore. Windows can "
                "be dragged by their title bar and resized from the corner."
            </p>
            <ul class="fact-list">
                <li>"Based in: somewhere with good coffee"</li>
                <li>"Currently into: systems programming and UI engineering"</li>
                <li>"Keyboard shortcut: Esc closes the focused window"</li>
            </ul>
        </article>
    }
}

#[component]
pub(super) fn ProjectsPage() -> impl IntoView {
    struct Project {
        name: &'static str,
        blurb: &'static str,
        stack: &'static str,
    }

    let projects = [
        Project {
            name: "Desktop Shell",
            blurb: "This site: a window manager, dock, and app sandbox in the browser.",
            stack: "Rust · Leptos · WASM",
        },
        Project {
            name: "Pixel Synth",
            blurb: "A tracker-style chiptune sequencer with a step editor.",
            stack: "TypeScript · Web Audio",
        },
        Project {
            name: "Trailhead",
            blurb: "Offline-first hiking log with elevation charts.",
            stack: "Rust · SQLite",
        },
    ];

    view! {
        <article class="page page-projects">
            <h1>"Projects"</h1>
            <div class="project-grid">
                {projects
                    .into_iter()
                    .map(|project| {
                        view! {
                            <section class="project-card">
                                <h2>{project.name}</h2>
                                <p>{project.blurb}</p>
                                <p class="project-stack">{project.stack}</p>
                            </section>
                        }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}

#[component]
pub(super) fn BlogPage() -> impl IntoView {
    let posts = [
        (
            "Building a window manager twice",
            "Notes from porting this shell's drag-and-drop core.",
        ),
        (
            "Z-order is a counter, not a sort",
            "Why a monotonic counter beats re-sorting the stack.",
        ),
        (
            "Sound design for fake operating systems",
            "Picking click and whoosh samples that do not get annoying.",
        ),
    ];

    view! {
        <article class="page page-blog">
            <h1>"Blog"</h1>
            <ul class="post-list">
                {posts
                    .into_iter()
                    .map(|(title, teaser)| {
                        view! {
                            <li class="post-item">
                                <h2>{title}</h2>
                                <p>{teaser}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </article>
    }
}

#[component]
pub(super) fn ContactPage() -> impl IntoView {
    view! {
        <article class="page page-contact">
            <h1>"Contact"</h1>
            <p>"The inbox is always open."</p>
            <ul class="contact-list">
                <li>
                    <span class="contact-label">"Email"</span>
                    <a href="mailto:hello@example.com">"hello@example.com"</a>
                </li>
                <li>
                    <span class="contact-label">"GitHub"</span>
                    <a href="https://github.com" target="_blank" rel="noreferrer">
                        "github.com/ayaz"
                    </a>
                </li>
                <li>
                    <span class="contact-label">"LinkedIn"</span>
                    <a href="https://linkedin.com" target="_blank" rel="noreferrer">
                        "linkedin.com/in/ayaz"
                    </a>
                </li>
            </ul>
        </article>
    }
}

#[component]
pub(super) fn ResumePage() -> impl IntoView {
    view! {
        <article class="page page-resume">
            <h1>"Resume"</h1>
            <section class="resume-section">
                <h2>"Experience"</h2>
                <p>
                    <strong>"Senior Software Engineer"</strong>
                    " — product frontends, design systems, and the occasional "
                    "backend service."
                </p>
                <p>
                    <strong>"Software Engineer"</strong>
                    " — shipped data tooling and internal dashboards."
                </p>
            </section>
            <section class="resume-section">
                <h2>"Skills"</h2>
                <p>"Rust, TypeScript, WebAssembly, UI architecture, too many editors."</p>
            </section>
            <p class="resume-download">
                <a href="/assets/resume.pdf" target="_blank" rel="noreferrer">
                    "Download the PDF version"
                </a>
            </p>
        </article>
    }
}
