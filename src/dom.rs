//! Browser host: binds the navigation controller to the live document.
//!
//! ARCHITECTURE
//! ============
//! `WebHost` resolves every element named by [`NavConfig`] once, at
//! document-ready, and implements the capability traits over `web-sys`.
//! [`boot`] builds the controller, attaches the intersection observer, runs
//! startup, and wires click/hashchange listeners. Listener closures are leaked
//! and live as long as the document.
//!
//! TRADE-OFFS
//! ==========
//! Per-mutation DOM failures (a rejected `setAttribute`, a style write on a
//! detached node) are logged at debug and skipped; navigation is advisory.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
};

use crate::config::NavConfig;
use crate::controller::NavController;
use crate::error::{DomError, StorageError};
use crate::host::{History, MenuSurface, PageSurface, RevealKey, RevealWatcher, SessionStore, ThemeSurface, Viewport};
use crate::menu::BarStyle;

const CONFIG_ATTRIBUTE: &str = "data-nav-config";

type SharedController = Rc<RefCell<NavController<WebHost>>>;

pub struct WebHost {
    window: Window,
    body: HtmlElement,
    color_toggle: Element,
    menu_button: Element,
    bars: Vec<HtmlElement>,
    mobile_nav: Element,
    logo: HtmlImageElement,
    pages: Vec<Element>,
    nav_links: Vec<Element>,
    action_buttons: Vec<Element>,
    reveal_targets: Vec<Element>,
    observer: Option<IntersectionObserver>,
    active_class: String,
    revealed_class: String,
    target_attribute: String,
}

impl WebHost {
    /// Resolve the DOM contract described by `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomError`] when a required element is missing or a
    /// configured selector is rejected by the browser.
    pub fn from_document(
        window: Window,
        document: &Document,
        body: HtmlElement,
        config: &NavConfig,
    ) -> Result<Self, DomError> {
        let color_toggle = by_id(document, &config.color_toggle_id)?;
        let menu_button = by_id(document, &config.menu_button_id)?;
        let mobile_nav = by_id(document, &config.mobile_nav_id)?;
        let logo = by_id(document, &config.logo_id)?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| DomError::MissingElement(config.logo_id.clone()))?;

        let bars = select_all(&menu_button, "span")?
            .into_iter()
            .filter_map(|el| el.dyn_ref::<HtmlElement>().cloned())
            .collect::<Vec<_>>();
        if bars.len() < crate::menu::BAR_COUNT {
            log::warn!("dom: menu button has {} bars, expected {}", bars.len(), crate::menu::BAR_COUNT);
        }

        Ok(Self {
            window,
            body,
            color_toggle,
            menu_button,
            bars,
            mobile_nav,
            logo,
            pages: select_all(document, &config.page_selector)?,
            nav_links: select_all(document, &config.nav_link_selector)?,
            action_buttons: select_all(document, &config.action_selector)?,
            reveal_targets: select_all(document, &config.reveal_selector())?,
            observer: None,
            active_class: config.active_class.clone(),
            revealed_class: config.revealed_class.clone(),
            target_attribute: config.target_attribute.clone(),
        })
    }

    fn attach_observer(&mut self, observer: IntersectionObserver) {
        self.observer = Some(observer);
    }

    fn reveal_key_of(&self, target: &Element) -> Option<RevealKey> {
        self.reveal_targets
            .iter()
            .position(|el| js_sys::Object::is(el.as_ref(), target.as_ref()))
            .map(RevealKey)
    }

    fn session_storage(&self) -> Result<web_sys::Storage, StorageError> {
        match self.window.session_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable("sessionStorage is null".to_owned())),
            Err(err) => Err(StorageError::Unavailable(format!("{err:?}"))),
        }
    }
}

fn set_class(el: &Element, class: &str, on: bool) {
    if let Err(err) = el.class_list().toggle_with_force(class, on) {
        log::debug!("dom: class {class:?} not updated: {err:?}");
    }
}

impl PageSurface for WebHost {
    fn page_ids(&self) -> Vec<String> {
        self.pages.iter().map(Element::id).collect()
    }

    fn set_page_active(&mut self, page_id: &str, active: bool) {
        for page in self.pages.iter().filter(|p| p.id() == page_id) {
            set_class(page, &self.active_class, active);
        }
    }

    fn nav_link_targets(&self) -> Vec<Option<String>> {
        self.nav_links.iter().map(|link| link.get_attribute(&self.target_attribute)).collect()
    }

    fn set_nav_link_active(&mut self, index: usize, active: bool) {
        if let Some(link) = self.nav_links.get(index) {
            set_class(link, &self.active_class, active);
        }
    }
}

impl MenuSurface for WebHost {
    fn set_panel_open(&mut self, open: bool) {
        set_class(&self.mobile_nav, &self.active_class, open);
    }

    fn set_bar_style(&mut self, bar: usize, style: BarStyle) {
        let Some(el) = self.bars.get(bar) else {
            return;
        };
        if let Err(err) = el.style().set_property(style.property, style.value) {
            log::debug!("dom: bar {bar} style not updated: {err:?}");
        }
    }
}

impl ThemeSurface for WebHost {
    fn set_root_attribute(&mut self, name: &str, value: &str) {
        if let Err(err) = self.body.set_attribute(name, value) {
            log::debug!("dom: {name} not set: {err:?}");
        }
    }

    fn set_logo_src(&mut self, src: &str) {
        self.logo.set_src(src);
    }
}

impl History for WebHost {
    fn fragment(&self) -> String {
        match self.window.location().hash() {
            Ok(hash) => hash,
            Err(err) => {
                log::debug!("dom: location.hash unreadable: {err:?}");
                String::new()
            }
        }
    }

    fn push_fragment(&mut self, fragment: &str) {
        let url = format!("#{fragment}");
        let pushed = self
            .window
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&url)));
        if let Err(err) = pushed {
            log::debug!("dom: history entry for {url} not pushed: {err:?}");
        }
    }
}

impl Viewport for WebHost {
    fn scroll_to_top(&mut self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

impl SessionStore for WebHost {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.session_storage()?
            .get_item(key)
            .map_err(|err| StorageError::Read(format!("{err:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.session_storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write(format!("{err:?}")))
    }
}

impl RevealWatcher for WebHost {
    fn reveal_targets(&self) -> Vec<RevealKey> {
        (0..self.reveal_targets.len()).map(RevealKey).collect()
    }

    fn watch(&mut self, key: RevealKey) {
        if let (Some(observer), Some(el)) = (&self.observer, self.reveal_targets.get(key.0)) {
            observer.observe(el);
        }
    }

    fn unwatch(&mut self, key: RevealKey) {
        if let (Some(observer), Some(el)) = (&self.observer, self.reveal_targets.get(key.0)) {
            observer.unobserve(el);
        }
    }

    fn mark_revealed(&mut self, key: RevealKey) {
        if let Some(el) = self.reveal_targets.get(key.0) {
            set_class(el, &self.revealed_class, true);
        }
    }
}

// =============================================================
// Wiring
// =============================================================

/// WASM entry point: installs logging and boots once the DOM is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }

    // A missing window or document falls through to `boot`, which reports it.
    if let Some(document) = web_sys::window().and_then(|w| w.document())
        && document.ready_state() == "loading"
    {
        listen(document.as_ref(), "DOMContentLoaded", |_| run_boot());
        return;
    }
    run_boot();
}

fn run_boot() {
    if let Err(err) = boot() {
        log::error!("navigation disabled: {err}");
    }
}

/// Build the controller against the current document and wire its events.
///
/// # Errors
///
/// Returns a [`DomError`] when the document does not satisfy the DOM contract.
pub fn boot() -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    let body = document.body().ok_or(DomError::NoBody)?;
    let config = load_config(&body);

    let host = WebHost::from_document(window.clone(), &document, body, &config)?;
    let controller: SharedController = Rc::new(RefCell::new(NavController::new(host, config)));

    install_observer(&controller);
    controller.borrow_mut().start();
    wire_listeners(&window, &controller);
    Ok(())
}

fn load_config(body: &HtmlElement) -> NavConfig {
    let Some(raw) = body.get_attribute(CONFIG_ATTRIBUTE) else {
        return NavConfig::default();
    };
    NavConfig::from_json(&raw).unwrap_or_else(|err| {
        log::warn!("dom: ignoring malformed {CONFIG_ATTRIBUTE}: {err}");
        NavConfig::default()
    })
}

fn install_observer(controller: &SharedController) {
    let threshold = controller.borrow().config().reveal_threshold;
    let handle = Rc::clone(controller);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let mut nav = handle.borrow_mut();
            let batch = entries
                .iter()
                .filter_map(|entry| entry.dyn_ref::<IntersectionObserverEntry>().cloned())
                .filter_map(|entry| {
                    nav.host()
                        .reveal_key_of(&entry.target())
                        .map(|key| (key, entry.is_intersecting()))
                })
                .collect::<Vec<_>>();
            nav.reveal(batch);
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            controller.borrow_mut().host_mut().attach_observer(observer);
            callback.forget();
        }
        Err(err) => log::warn!("dom: reveal-on-scroll disabled: {err:?}"),
    }
}

fn wire_listeners(window: &Window, controller: &SharedController) {
    let nav = controller.borrow();
    let host = nav.host();

    let handle = Rc::clone(controller);
    listen(host.menu_button.as_ref(), "click", move |_| {
        handle.borrow_mut().toggle_menu();
    });

    let handle = Rc::clone(controller);
    listen(host.color_toggle.as_ref(), "click", move |_| {
        handle.borrow_mut().toggle_theme();
    });

    for link in &host.nav_links {
        wire_trigger(controller, link, &host.target_attribute, true);
    }
    for button in &host.action_buttons {
        wire_trigger(controller, button, &host.target_attribute, false);
    }

    let handle = Rc::clone(controller);
    listen(window.as_ref(), "hashchange", move |_| {
        handle.borrow_mut().handle_hash_change();
    });
}

fn wire_trigger(controller: &SharedController, el: &Element, attribute: &str, prevent_default: bool) {
    let handle = Rc::clone(controller);
    let source = el.clone();
    let attribute = attribute.to_owned();
    listen(el.as_ref(), "click", move |event| {
        if prevent_default {
            event.prevent_default();
        }
        let target = source.get_attribute(&attribute);
        handle.borrow_mut().activate_trigger(target.as_deref());
    });
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        log::warn!("dom: {event} listener not installed: {err:?}");
    }
    callback.forget();
}

fn by_id(document: &Document, id: &str) -> Result<Element, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_owned()))
}

/// Elements matching `selector` under `root`, in document order.
fn select_all<R>(root: &R, selector: &str) -> Result<Vec<Element>, DomError>
where
    R: QueryRoot,
{
    let nodes = root
        .query_all(selector)
        .map_err(|err| DomError::BadSelector { selector: selector.to_owned(), message: format!("{err:?}") })?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

/// `querySelectorAll` is defined separately on `Document` and `Element`.
trait QueryRoot {
    fn query_all(&self, selector: &str) -> Result<web_sys::NodeList, JsValue>;
}

impl QueryRoot for Document {
    fn query_all(&self, selector: &str) -> Result<web_sys::NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

impl QueryRoot for Element {
    fn query_all(&self, selector: &str) -> Result<web_sys::NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}
