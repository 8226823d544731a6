//! Page-load wiring and the functions exported to markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! `start` runs when the wasm module is instantiated. It waits for the DOM,
//! then [`boot`] reads the page config, looks up the elements once, and hands
//! them to the behavior modules through event closures. The only state kept
//! between events is the [`ScrollTracker`] owned by the scroll closure.
//!
//! `toggleMenu` and `toggleDarkMode` are exported for `onclick` attributes in
//! the theme's templates; they look their elements up on every call.

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element};

use crate::browser;
use crate::config::PageConfig;
use crate::consts::PAGE_CONFIG_ATTRIBUTE;
use crate::error::PageError;
use crate::menu;
use crate::nav::ScrollTracker;
use crate::theme::{self, Theme, ThemeKeys};
use crate::tooltip;

// =============================================================================
// ENTRY
// =============================================================================

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let document = match browser::document() {
        Ok(document) => document,
        Err(err) => {
            log::error!("blog-chrome: not starting: {err}");
            return;
        }
    };

    if document.ready_state() == "loading" {
        let cb = Closure::once_into_js(move || match browser::document() {
            Ok(document) => boot_with_page_config(&document),
            Err(err) => log::error!("blog-chrome: not starting: {err}"),
        });
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref()) {
            log::error!("blog-chrome: DOMContentLoaded listener failed: {}", browser::dom_error(err));
        }
    } else {
        boot_with_page_config(&document);
    }
}

fn boot_with_page_config(document: &Document) {
    let config = page_config(document);
    boot(document, &config);
}

/// Config from the root's `data-page-config` JSON, or the defaults.
///
/// Malformed JSON is logged and the defaults are used.
pub fn page_config(document: &Document) -> PageConfig {
    let Some(raw) = document
        .document_element()
        .and_then(|root| root.get_attribute(PAGE_CONFIG_ATTRIBUTE))
    else {
        return PageConfig::default();
    };
    PageConfig::from_json(&raw).unwrap_or_else(|err| {
        log::warn!("blog-chrome: ignoring {PAGE_CONFIG_ATTRIBUTE}: {err}");
        PageConfig::default()
    })
}

/// Wire every behavior onto `document`.
///
/// Each step is independent; a failing step is logged and the rest still run.
pub fn boot(document: &Document, config: &PageConfig) {
    let steps: [(&str, fn(&Document, &PageConfig) -> Result<(), PageError>); 4] = [
        ("nav", wire_scroll),
        ("tooltips", wire_tooltips),
        ("theme", apply_theme),
        ("theme toggle", wire_theme_toggle),
    ];
    for (name, step) in steps {
        if let Err(err) = step(document, config) {
            log::error!("blog-chrome: {name} setup failed [{}]: {err}", err.error_code());
        }
    }
}

// =============================================================================
// STEPS
// =============================================================================

fn wire_scroll(document: &Document, config: &PageConfig) -> Result<(), PageError> {
    let Some(nav) = document.get_element_by_id(&config.nav_id) else {
        log::debug!("blog-chrome: no #{}, scroll tracking off", config.nav_id);
        return Ok(());
    };
    let header_height = browser::client_height(&nav);
    let mut tracker = ScrollTracker::new(header_height, config.fixed_class.as_str(), config.visible_class.as_str());

    let doc = document.clone();
    let cb = Closure::wrap(Box::new(move || {
        let top = browser::scroll_top(&doc);
        if let Err(err) = tracker.on_scroll(&nav, top) {
            log::warn!("blog-chrome: scroll update failed: {err}");
        }
    }) as Box<dyn FnMut()>);

    browser::window()?
        .add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref())
        .map_err(browser::dom_error)?;
    cb.forget();

    log::info!("blog-chrome: scroll tracking on #{} ({header_height}px)", config.nav_id);
    Ok(())
}

fn wire_tooltips(document: &Document, config: &PageConfig) -> Result<(), PageError> {
    let count = tooltip::init_tooltips(document, &config.tooltip_selector)?;
    log::info!("blog-chrome: {count} tooltip(s) attached");
    Ok(())
}

fn apply_theme(document: &Document, config: &PageConfig) -> Result<(), PageError> {
    let root = document.document_element().ok_or(PageError::NoDocument)?;
    let icon = document.get_element_by_id(&config.theme_icon_id);
    let storage = browser::local_storage()?;
    let theme = theme::apply_saved(&storage, &root, icon.as_ref(), theme_keys(config))?;
    log::info!("blog-chrome: theme {theme}");
    Ok(())
}

fn wire_theme_toggle(document: &Document, config: &PageConfig) -> Result<(), PageError> {
    let Some(button) = document.get_element_by_id(&config.theme_toggle_id) else {
        log::debug!("blog-chrome: no #{}, theme toggle off", config.theme_toggle_id);
        return Ok(());
    };

    let config = config.clone();
    let cb = Closure::wrap(Box::new(move || {
        if let Err(err) = toggle_theme(&config) {
            log::error!("blog-chrome: theme toggle failed [{}]: {err}", err.error_code());
        }
    }) as Box<dyn FnMut()>);

    button
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .map_err(browser::dom_error)?;
    cb.forget();
    Ok(())
}

fn theme_keys(config: &PageConfig) -> ThemeKeys<'_> {
    ThemeKeys {
        attribute: &config.theme_attribute,
        storage_key: &config.theme_storage_key,
    }
}

// =============================================================================
// ACTIONS
// =============================================================================

fn toggle_theme(config: &PageConfig) -> Result<Theme, PageError> {
    let document = browser::document()?;
    let root = document.document_element().ok_or(PageError::NoDocument)?;
    let icon = document.get_element_by_id(&config.theme_icon_id);
    let storage = browser::local_storage()?;
    theme::toggle::<_, _, Element>(&storage, &root, icon.as_ref(), theme_keys(config), &config.theme_icon_id)
}

fn toggle_profile_menu(config: &PageConfig) -> Result<bool, PageError> {
    let document = browser::document()?;
    let menu = browser::require_element(&document, &config.profile_menu_id)?;
    menu::toggle_menu(&menu, &config.hidden_class)
}

/// Show or hide the profile menu. Returns whether it is now hidden.
///
/// # Errors
///
/// Throws when the profile menu element is missing.
#[wasm_bindgen(js_name = toggleMenu)]
pub fn toggle_menu() -> Result<bool, JsValue> {
    let document = browser::document()?;
    Ok(toggle_profile_menu(&page_config(&document))?)
}

/// Flip the theme. Returns the new theme name.
///
/// # Errors
///
/// Throws when the theme icon is missing, after the theme has been switched
/// and saved.
#[wasm_bindgen(js_name = toggleDarkMode)]
pub fn toggle_dark_mode() -> Result<String, JsValue> {
    let document = browser::document()?;
    let theme = toggle_theme(&page_config(&document))?;
    Ok(theme.as_str().to_owned())
}
