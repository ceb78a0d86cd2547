//! Button Components
//!
//! - Primary: main actions (download)
//! - Ghost: secondary actions (clear filters)
//! - Icon: compact actions with an accessible label (close)

use std::rc::Rc;

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    /// Receives the mounted element (used by the overlay focus trap)
    #[props(default)]
    pub onmounted: Option<EventHandler<Rc<MountedData>>>,
    /// Called when the button gains focus
    #[props(default)]
    pub onfocus: Option<EventHandler<()>>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Ghost,
///         onclick: move |_| clear_filters(),
///         "Clear filters"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_class(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onmounted: move |e| {
                if let Some(handler) = &props.onmounted {
                    handler.call(e.data());
                }
            },
            onfocus: move |_| {
                if let Some(handler) = &props.onfocus {
                    handler.call(());
                }
            },
            onkeydown: stop_activation_keys,
            onclick: move |e| {
                e.stop_propagation();
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, clear, ...)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub onmounted: Option<EventHandler<Rc<MountedData>>>,
    #[props(default)]
    pub onfocus: Option<EventHandler<()>>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_class("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onmounted: move |e| {
                if let Some(handler) = &props.onmounted {
                    handler.call(e.data());
                }
            },
            onfocus: move |_| {
                if let Some(handler) = &props.onfocus {
                    handler.call(());
                }
            },
            onkeydown: stop_activation_keys,
            onclick: move |e| {
                e.stop_propagation();
                props.onclick.call(());
            },
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(
    onclick: EventHandler<()>,
    #[props(default)] onmounted: Option<EventHandler<Rc<MountedData>>>,
    #[props(default)] onfocus: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            onmounted: onmounted,
            onfocus: onfocus,
            "\u{00D7}"
        }
    }
}

/// Enter/Space on a nested button must not also activate its container.
fn stop_activation_keys(evt: KeyboardEvent) {
    if is_activation_key(&evt.key()) {
        evt.stop_propagation();
    }
}

/// Keys that activate buttons and button-like elements
pub fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}
