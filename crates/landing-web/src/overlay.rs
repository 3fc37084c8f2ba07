use web_sys as web;

#[inline]
pub fn set_text(document: &web::Document, selector: &str, text: &str) {
    if let Ok(Some(el)) = document.query_selector(selector) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn clear(document: &web::Document, selector: &str) {
    set_text(document, selector, "");
}
