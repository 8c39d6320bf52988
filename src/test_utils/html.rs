use axum::{body::Body, response::Response};
use scraper::{Html, Selector};

async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");

    String::from_utf8_lossy(&body).to_string()
}

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&body_text(response).await)
}

pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    Html::parse_fragment(&body_text(response).await)
}

/// The text of the alert in `response`, with whitespace collapsed.
pub(crate) async fn alert_text(response: Response<Body>) -> String {
    let fragment = parse_html_fragment(response).await;
    let alert = fragment
        .select(&Selector::parse("[role=alert]").unwrap())
        .next()
        .expect("No alert found");

    alert.text().flat_map(str::split_whitespace).collect::<Vec<_>>().join(" ")
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}
