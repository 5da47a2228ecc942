//! Browser Tests
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use amahle_core::config::{
    AlertConfig, BackToTopConfig, ClipboardConfig, ConfirmDeleteConfig, FilterSidebarConfig,
    ImagePreviewConfig, LazyImageConfig, PasswordConfig, PriceConfig, RatingConfig, SearchConfig,
    SmoothScrollConfig, ValidationConfig,
};
use amahle_core::PageConfig;
use amahle_ui::behaviors::{actions, alerts, forms, media, navigation, price, rating, search};
use amahle_ui::schedule::{self, Debouncer};
use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{
    DataTransfer, Document, Element, Event, EventInit, EventTarget, File, HtmlElement, HtmlInputElement,
    HtmlSelectElement,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Mount `html` in a fresh container at the end of the body
fn fixture(html: &str) -> Element {
    let doc = document();
    let root = doc.create_element("div").unwrap();
    root.set_inner_html(html);
    doc.body().unwrap().append_child(&root).unwrap();
    root
}

fn find<T: JsCast>(root: &Element, selector: &str) -> T {
    root.query_selector(selector).unwrap().unwrap().dyn_into::<T>().unwrap()
}

/// Dispatch a bubbling, cancelable event; false when a listener prevented the default
fn fire(target: &EventTarget, kind: &str) -> bool {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap()
}

#[wasm_bindgen_test]
fn test_price_total_follows_room_count() {
    let root = fixture(
        r#"<input name="num_rooms"><span data-price="100"></span><strong id="total-price"></strong>"#,
    );
    price::bind(&document(), &PriceConfig::default(), "R").unwrap();

    let input: HtmlInputElement = find(&root, "input");
    let total: Element = find(&root, "#total-price");

    input.set_value("3");
    fire(&input, "input");
    assert_eq!(total.text_content().unwrap(), "R300.00");

    input.set_value("abc");
    fire(&input, "input");
    assert_eq!(total.text_content().unwrap(), "R0.00");

    root.remove();
}

#[wasm_bindgen_test]
fn test_rating_lights_selected_and_previous_stars() {
    let stars: String = (1..=5)
        .map(|i| format!(r#"<input type="radio" name="rating" value="{i}"><label>{i}</label>"#))
        .collect();
    let root = fixture(&format!(r#"<div class="rating-input">{stars}</div>"#));
    rating::bind(&document(), &RatingConfig::default()).unwrap();

    let inputs = root.query_selector_all("input").unwrap();
    let third: HtmlInputElement = inputs.item(2).unwrap().dyn_into().unwrap();
    third.set_checked(true);
    fire(&third, "change");

    let labels = root.query_selector_all("label").unwrap();
    let active: Vec<bool> = (0..labels.length())
        .map(|i| labels.item(i).unwrap().dyn_into::<Element>().unwrap().class_list().contains("active"))
        .collect();
    assert_eq!(active, vec![true, true, true, false, false]);

    root.remove();
}

#[wasm_bindgen_test]
fn test_invalid_form_is_blocked_and_marked() {
    let root = fixture(r#"<form data-validate><input name="email" required></form>"#);
    forms::bind_validation(&document(), &ValidationConfig::default()).unwrap();

    let form: Element = find(&root, "form");
    assert!(!fire(&form, "submit"));
    assert!(form.class_list().contains("was-validated"));

    let input: HtmlInputElement = find(&root, "input");
    input.set_value("tenant@example.com");
    assert!(fire(&form, "submit"));

    root.remove();
}

#[wasm_bindgen_test]
fn test_delete_confirmation_controls_default_action() {
    let window = web_sys::window().unwrap();
    let key = JsValue::from_str("confirm");
    let original = Reflect::get(&window, &key).unwrap();

    let root = fixture(r#"<button type="button" data-confirm-delete>Delete</button>"#);
    forms::bind_confirm_delete(&document(), &ConfirmDeleteConfig::default()).unwrap();
    let button: Element = find(&root, "button");

    Reflect::set(&window, &key, &Function::new_with_args("message", "return false")).unwrap();
    assert!(!fire(&button, "click"));

    Reflect::set(&window, &key, &Function::new_with_args("message", "return true")).unwrap();
    assert!(fire(&button, "click"));

    Reflect::set(&window, &key, &original).unwrap();
    root.remove();
}

#[wasm_bindgen_test]
fn test_password_toggle_flips_type_and_icon() {
    let root = fixture(
        r#"<input type="password" value="secret"><button type="button" class="password-toggle"><i class="fa fa-eye"></i></button>"#,
    );
    forms::bind_password_toggle(&document(), &PasswordConfig::default()).unwrap();

    let input: Element = find(&root, "input");
    let toggle: Element = find(&root, ".password-toggle");
    let icon: Element = find(&root, "i");

    fire(&toggle, "click");
    assert_eq!(input.get_attribute("type").as_deref(), Some("text"));
    assert!(icon.class_list().contains("fa-eye-slash"));
    assert!(!icon.class_list().contains("fa-eye"));

    fire(&toggle, "click");
    assert_eq!(input.get_attribute("type").as_deref(), Some("password"));
    assert!(icon.class_list().contains("fa-eye"));

    root.remove();
}

#[wasm_bindgen_test]
fn test_filter_sidebar_toggles_class() {
    let root = fixture(r#"<button id="filter-toggle"></button><aside id="filter-sidebar"></aside>"#);
    navigation::bind_filter_sidebar(&document(), &FilterSidebarConfig::default()).unwrap();

    let toggle: Element = find(&root, "#filter-toggle");
    let sidebar: Element = find(&root, "#filter-sidebar");

    fire(&toggle, "click");
    assert!(sidebar.class_list().contains("show"));
    fire(&toggle, "click");
    assert!(!sidebar.class_list().contains("show"));

    root.remove();
}

#[wasm_bindgen_test]
fn test_city_is_capitalized_on_blur() {
    let root = fixture(r#"<form id="search-form"><input name="city"></form>"#);
    search::bind(&document(), &SearchConfig::default()).unwrap();

    let city: HtmlInputElement = find(&root, "input");
    city.set_value("cAPE town");
    fire(&city, "blur");
    assert_eq!(city.value(), "Cape town");

    root.remove();
}

#[wasm_bindgen_test]
fn test_city_select_is_capitalized_on_blur() {
    let root = fixture(
        r#"<form id="search-form"><select name="city"><option value="durban">durban</option><option value="Durban">Durban</option></select></form>"#,
    );
    search::bind(&document(), &SearchConfig::default()).unwrap();

    let city: HtmlSelectElement = find(&root, "select");
    assert_eq!(city.value(), "durban");
    fire(&city, "blur");
    assert_eq!(city.value(), "Durban");

    root.remove();
}

#[wasm_bindgen_test]
fn test_smooth_scroll_only_intercepts_existing_targets() {
    let root = fixture(
        r##"<a id="to-reviews" href="#listing-reviews">Reviews</a>
            <a id="to-map" href="#no-such-section">Map</a>
            <a id="to-top" href="#">Top</a>
            <section id="listing-reviews">Reviews</section>"##,
    );
    navigation::bind_smooth_scroll(&document(), &SmoothScrollConfig::default()).unwrap();

    assert!(!fire(&find::<Element>(&root, "#to-reviews"), "click"));
    assert!(fire(&find::<Element>(&root, "#to-map"), "click"));
    assert!(fire(&find::<Element>(&root, "#to-top"), "click"));

    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
    root.remove();
}

#[wasm_bindgen_test]
fn test_back_to_top_follows_scroll_threshold() {
    let root = fixture(
        r#"<button id="back-to-top" style="display: none">Top</button><div style="height: 5000px"></div>"#,
    );
    navigation::bind_back_to_top(&document(), &BackToTopConfig::default()).unwrap();

    let window = web_sys::window().unwrap();
    let button: HtmlElement = find(&root, "#back-to-top");
    let display = |el: &HtmlElement| el.style().get_property_value("display").unwrap();

    window.scroll_to_with_x_and_y(0.0, 400.0);
    fire(&window, "scroll");
    assert_eq!(display(&button), "block");

    window.scroll_to_with_x_and_y(0.0, 300.0);
    fire(&window, "scroll");
    assert_eq!(display(&button), "none");

    window.scroll_to_with_x_and_y(0.0, 0.0);
    root.remove();
}

#[wasm_bindgen_test]
fn test_boot_installs_exports_without_auto_init() {
    let window = web_sys::window().unwrap();
    let key = JsValue::from_str("appUtils");
    Reflect::delete_property(&window, &key).unwrap();

    let block = fixture(r#"<script type="application/json" id="amahle-config">{"auto_init": false}</script>"#);
    amahle_ui::boot(&document());

    let utils = Reflect::get(&window, &key).unwrap();
    assert!(utils.is_object());
    let format: Function = Reflect::get(&utils, &JsValue::from_str("formatCurrency"))
        .unwrap()
        .dyn_into()
        .unwrap();
    let formatted = format.call1(&JsValue::NULL, &JsValue::from_f64(1234.5)).unwrap();
    assert_eq!(formatted.as_string().as_deref(), Some("R1,234.50"));

    block.remove();
    amahle_ui::config::set_active(PageConfig::default());
}

#[wasm_bindgen_test]
fn test_deferred_image_loads_once() {
    let root = fixture(r#"<img data-src="/static/uploads/flat.jpg">"#);
    let img: Element = find(&root, "img");

    media::load_deferred(&img);
    assert!(img.get_attribute("src").unwrap().ends_with("/static/uploads/flat.jpg"));
    assert!(!img.has_attribute("data-src"));

    img.set_attribute("src", "/other.jpg").unwrap();
    media::load_deferred(&img);
    assert_eq!(img.get_attribute("src").as_deref(), Some("/other.jpg"));

    root.remove();
}

#[wasm_bindgen_test]
fn test_format_currency_export() {
    assert_eq!(amahle_ui::format_currency(JsValue::from_f64(1234.5)), "R1,234.50");
    assert_eq!(amahle_ui::format_currency(JsValue::from_f64(0.0)), "R0.00");
    assert_eq!(amahle_ui::format_currency(JsValue::from_f64(1234.125)), "R1,234.13");
    assert_eq!(amahle_ui::format_currency(JsValue::from_str("99.5")), "R99.50");
    assert_eq!(amahle_ui::format_currency(JsValue::from_str("abc")), "RNaN");
}

#[wasm_bindgen_test]
async fn test_alerts_dismiss_after_delay_unless_permanent() {
    let root = fixture(
        r#"<div class="alert alert-info">Saved</div><div class="alert alert-permanent">Read me</div>"#,
    );
    let config = AlertConfig {
        dismiss_after_ms: 40,
        ..AlertConfig::default()
    };
    alerts::bind(&document(), &config).unwrap();

    let transient: Element = find(&root, ".alert-info");
    let permanent: Element = find(&root, ".alert-permanent");

    TimeoutFuture::new(10).await;
    assert!(transient.is_connected());

    TimeoutFuture::new(120).await;
    assert!(!transient.is_connected());
    assert!(permanent.is_connected());

    root.remove();
}

#[wasm_bindgen_test]
async fn test_debouncer_runs_only_the_last_call() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let debouncer = Debouncer::new(60);

    for value in ["c", "ca", "cap"] {
        let calls = Rc::clone(&calls);
        debouncer.call(move || calls.borrow_mut().push(value));
        TimeoutFuture::new(10).await;
    }
    assert!(calls.borrow().is_empty());

    TimeoutFuture::new(150).await;
    assert_eq!(*calls.borrow(), vec!["cap"]);
}

#[wasm_bindgen_test]
async fn test_teardown_cancels_pending_tasks() {
    let fired = Rc::new(Cell::new(false));
    let flag = Rc::clone(&fired);
    schedule::schedule(30, move || flag.set(true));
    assert!(schedule::pending_count() >= 1);

    amahle_ui::teardown();
    assert_eq!(schedule::pending_count(), 0);

    TimeoutFuture::new(80).await;
    assert!(!fired.get());
}

#[wasm_bindgen_test]
async fn test_copy_label_restores_original_text() {
    let root = fixture(r#"<button data-copy="https://amahle.example/listing/7">Copy link</button>"#);
    let button: Element = find(&root, "button");

    actions::flash_label(&button, "Copied!", 40);
    assert_eq!(button.text_content().as_deref(), Some("Copied!"));

    // Second click while the label is showing
    actions::flash_label(&button, "Copied!", 40);

    TimeoutFuture::new(120).await;
    assert_eq!(button.text_content().as_deref(), Some("Copy link"));

    root.remove();
}

#[wasm_bindgen_test]
async fn test_notification_removes_itself() {
    let mut config = PageConfig::default();
    config.notifications.dismiss_after_ms = 40;
    amahle_ui::config::set_active(config);

    amahle_ui::notification::show("Booking saved", Some("success")).unwrap();
    let notice = document().query_selector(".alert.alert-success").unwrap().unwrap();
    assert!(notice.text_content().unwrap().contains("Booking saved"));

    TimeoutFuture::new(120).await;
    assert!(document().query_selector(".alert.alert-success").unwrap().is_none());

    amahle_ui::config::set_active(PageConfig::default());
}

/// Put a one-file selection on a file input
fn select_file(input: &HtmlInputElement, name: &str) {
    let bits = Array::of1(&JsValue::from_str("not really a png"));
    let file = File::new_with_str_sequence(&bits, name).unwrap();
    let transfer = DataTransfer::new().unwrap();
    transfer.items().add_with_file(&file).unwrap();
    input.set_files(transfer.files().as_ref());
}

#[wasm_bindgen_test]
async fn test_image_preview_shows_selected_file() {
    let root = fixture(r#"<input type="file" accept="image/*"><img id="image-preview" style="display: none">"#);
    media::bind_image_preview(&document(), &ImagePreviewConfig::default()).unwrap();

    let input: HtmlInputElement = find(&root, "input");
    let preview: HtmlElement = find(&root, "#image-preview");

    // Nothing selected yet
    fire(&input, "change");
    TimeoutFuture::new(50).await;
    assert!(preview.get_attribute("src").is_none());

    select_file(&input, "flat.png");
    fire(&input, "change");
    TimeoutFuture::new(100).await;
    assert!(preview.get_attribute("src").unwrap().starts_with("data:"));
    assert_eq!(preview.style().get_property_value("display").unwrap(), "block");

    root.remove();
}

#[wasm_bindgen_test]
async fn test_image_preview_without_preview_element() {
    let root = fixture(r#"<input type="file" accept="image/png">"#);
    media::bind_image_preview(&document(), &ImagePreviewConfig::default()).unwrap();

    let input: HtmlInputElement = find(&root, "input");
    select_file(&input, "flat.png");
    fire(&input, "change");
    TimeoutFuture::new(100).await;

    assert!(document().get_element_by_id("image-preview").is_none());
    root.remove();
}

#[wasm_bindgen_test]
async fn test_lazy_images_load_when_visible() {
    let root = fixture(
        r#"<img id="lazy-visible" data-src="/static/uploads/visible.jpg" style="position: fixed; top: 0; left: 0; width: 10px; height: 10px">
           <img id="lazy-offscreen" data-src="/static/uploads/offscreen.jpg" style="position: fixed; top: 20000px; left: 0; width: 10px; height: 10px">"#,
    );
    media::bind_lazy_images(&document(), &LazyImageConfig::default()).unwrap();
    TimeoutFuture::new(200).await;

    let visible: Element = find(&root, "#lazy-visible");
    assert!(visible.get_attribute("src").unwrap().ends_with("/static/uploads/visible.jpg"));
    assert!(!visible.has_attribute("data-src"));

    let offscreen: Element = find(&root, "#lazy-offscreen");
    assert!(offscreen.has_attribute("data-src"));
    assert!(offscreen.get_attribute("src").is_none());

    root.remove();
}

#[wasm_bindgen_test]
async fn test_search_input_is_debounced_to_final_value() {
    let root = fixture(r#"<input name="city">"#);
    let input: HtmlInputElement = find(&root, "input");

    let queries = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = Rc::clone(&queries);
    search::bind_suggestions(&input, 60, move |query: &str| sink.borrow_mut().push(query.to_string())).unwrap();

    for value in ["D", "Du", "Dur"] {
        input.set_value(value);
        fire(&input, "input");
        TimeoutFuture::new(10).await;
    }
    assert!(queries.borrow().is_empty());

    TimeoutFuture::new(150).await;
    assert_eq!(*queries.borrow(), vec!["Dur".to_string()]);

    root.remove();
}

fn navigator() -> Object {
    Reflect::get(&web_sys::window().unwrap(), &JsValue::from_str("navigator"))
        .unwrap()
        .unchecked_into()
}

/// Shadow `navigator.clipboard` with an object whose `writeText` runs `body`
fn stub_clipboard(body: &str) -> Object {
    let clipboard = Object::new();
    Reflect::set(&clipboard, &JsValue::from_str("writeText"), &Function::new_with_args("text", body)).unwrap();

    let descriptor = Object::new();
    Reflect::set(&descriptor, &JsValue::from_str("value"), &clipboard).unwrap();
    Reflect::set(&descriptor, &JsValue::from_str("configurable"), &JsValue::TRUE).unwrap();
    Object::define_property(&navigator(), &JsValue::from_str("clipboard"), &descriptor);
    clipboard
}

fn restore_clipboard() {
    Reflect::delete_property(&navigator(), &JsValue::from_str("clipboard")).unwrap();
}

fn quick_restore() -> ClipboardConfig {
    ClipboardConfig {
        restore_after_ms: 40,
        ..ClipboardConfig::default()
    }
}

#[wasm_bindgen_test]
async fn test_clipboard_copy_success_flashes_copied() {
    let clipboard = stub_clipboard("this.copied = text; return Promise.resolve();");
    let root = fixture(r#"<button data-copy="ERF-1234">Copy reference</button>"#);
    actions::bind_clipboard(&document(), &quick_restore()).unwrap();

    let button: Element = find(&root, "button");
    fire(&button, "click");
    TimeoutFuture::new(10).await;

    assert_eq!(button.text_content().as_deref(), Some("Copied!"));
    let copied = Reflect::get(&clipboard, &JsValue::from_str("copied")).unwrap();
    assert_eq!(copied.as_string().as_deref(), Some("ERF-1234"));

    TimeoutFuture::new(100).await;
    assert_eq!(button.text_content().as_deref(), Some("Copy reference"));

    restore_clipboard();
    root.remove();
}

#[wasm_bindgen_test]
async fn test_clipboard_copy_failure_flashes_failed() {
    stub_clipboard("return Promise.reject(new Error('denied'));");
    let root = fixture(r#"<button data-copy="ERF-1234">Copy reference</button>"#);
    actions::bind_clipboard(&document(), &quick_restore()).unwrap();

    let button: Element = find(&root, "button");
    fire(&button, "click");
    TimeoutFuture::new(10).await;
    assert_eq!(button.text_content().as_deref(), Some("Copy failed"));

    TimeoutFuture::new(100).await;
    assert_eq!(button.text_content().as_deref(), Some("Copy reference"));

    restore_clipboard();
    root.remove();
}
