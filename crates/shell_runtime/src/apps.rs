//! App registry and window content panels.
//!
//! The window manager treats panel content as opaque: it maps an [`AppId`]
//! to a view and passes nothing else through. Panels hold no window state.

mod pages;

use leptos::*;

use crate::model::{AppId, OpenWindowRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One registered desktop app: identity plus presentation metadata.
pub struct AppDescriptor {
    /// Stable app identity.
    pub app: AppId,
    /// Label shown on the desktop icon, the dock tooltip, and the title bar.
    pub title: &'static str,
    /// Icon asset path, passed through to the render layer unchanged.
    pub icon: &'static str,
}

const APP_REGISTRY: [AppDescriptor; 5] = [
    AppDescriptor {
        app: AppId::About,
        title: "About",
        icon: "/assets/icons/about.png",
    },
    AppDescriptor {
        app: AppId::Projects,
        title: "Projects",
        icon: "/assets/icons/projects.png",
    },
    AppDescriptor {
        app: AppId::Blog,
        title: "Blog",
        icon: "/assets/icons/blog.png",
    },
    AppDescriptor {
        app: AppId::Contact,
        title: "Contact",
        icon: "/assets/icons/contact.png",
    },
    AppDescriptor {
        app: AppId::Resume,
        title: "Resume",
        icon: "/assets/icons/resume.png",
    },
];

/// All registered apps, in desktop-icon and dock order.
pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

/// Descriptor for `app`.
pub fn descriptor(app: AppId) -> &'static AppDescriptor {
    app_registry()
        .iter()
        .find(|entry| entry.app == app)
        .expect("every AppId is registered")
}

/// Builds the open/toggle request for a registered app.
pub fn open_request(app: AppId) -> OpenWindowRequest {
    let descriptor = descriptor(app);
    OpenWindowRequest::new(descriptor.app, descriptor.title, descriptor.icon)
}

/// Mounts the content panel for `app`.
pub fn render_window_contents(app: AppId) -> View {
    match app {
        AppId::About => view! { <pages::AboutPage /> }.into_view(),
        AppId::Projects => view! { <pages::ProjectsPage /> }.into_view(),
        AppId::Blog => view! { <pages::BlogPage /> }.into_view(),
        AppId::Contact => view! { <pages::ContactPage /> }.into_view(),
        AppId::Resume => view! { <pages::ResumePage /> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_app_id_has_a_registry_entry() {
        for app in [
            AppId::About,
            AppId::Projects,
            AppId::Blog,
            AppId::Contact,
            AppId::Resume,
        ] {
            let entry = descriptor(app);
            assert_eq!(entry.app, app);
            assert!(!entry.title.is_empty());
            assert!(entry.icon.starts_with("/assets/"));
        }
    }

    #[test]
    fn open_request_carries_registry_metadata() {
        let request = open_request(AppId::Blog);
        assert_eq!(request.app, AppId::Blog);
        assert_eq!(request.title, "Blog");
        assert_eq!(request.icon, "/assets/icons/blog.png");
    }
}
