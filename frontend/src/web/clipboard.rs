//! 剪贴板
//!
//! 优先使用 `navigator.clipboard.writeText`；不可用或被拒绝时，
//! 退回到隐藏 textarea + `execCommand("copy")`。尽力而为，不重试。

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

fn clipboard_api_available(window: &web_sys::Window) -> bool {
    js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false)
}

/// 复制文本，返回是否成功
pub async fn copy_text(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    if clipboard_api_available(&window) {
        let promise = window.navigator().clipboard().write_text(text);
        match JsFuture::from(promise).await {
            Ok(_) => return true,
            Err(e) => tracing::warn!(error = ?e, "clipboard API rejected, using fallback"),
        }
    }

    fallback_copy(&window, text).unwrap_or_else(|e| {
        tracing::warn!(error = ?e, "fallback copy failed");
        false
    })
}

fn fallback_copy(window: &web_sys::Window, text: &str) -> Result<bool, JsValue> {
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let textarea: HtmlTextAreaElement = document.create_element("textarea")?.dyn_into()?;
    textarea.set_value(text);
    let style = textarea.style();
    style.set_property("position", "fixed")?;
    style.set_property("left", "-9999px")?;
    style.set_property("top", "0")?;

    body.append_child(&textarea)?;
    textarea.select();
    let copied = match document.dyn_into::<HtmlDocument>() {
        Ok(doc) => doc.exec_command("copy").unwrap_or(false),
        Err(_) => false,
    };
    body.remove_child(&textarea)?;

    Ok(copied)
}
