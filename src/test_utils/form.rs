use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(element: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let hx_attribute = element
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        hx_attribute, endpoint,
        "want element with attribute {attribute}=\"{endpoint}\", got {hx_attribute:?}"
    );
}

/// Assert that `form` has a control called `name` of `type_`, e.g. "select"
/// for `<select>` elements or "number" for `<input type="number">`.
///
/// Returns whether the control is required.
#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) -> bool {
    let selector = Selector::parse(&format!("[name=\"{name}\"]")).unwrap();
    let control = form
        .select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No form control found with name \"{name}\""));

    let got_type = match control.value().name() {
        "input" => control.value().attr("type").unwrap_or("text"),
        tag => tag,
    };
    assert_eq!(
        got_type, type_,
        "want control {name} with type \"{type_}\", got {got_type:?}"
    );

    control.value().attr("required").is_some()
}
