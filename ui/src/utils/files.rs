use base64::{Engine as _, engine::general_purpose};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, File, FileReader};

/// MIME type used when the browser can't tell what the file is.
const FALLBACK_MIME: &str = "application/octet-stream";

/// Read a user-selected file into a `data:` URL suitable for `<img src>`.
///
/// Resolves only once the whole file has been read.
pub async fn read_file_as_data_url(file: &File) -> Result<String, String> {
    let bytes = read_file_as_bytes(file).await?;
    Ok(data_url(&file.type_(), &bytes))
}

/// Encode `bytes` as a base64 `data:` URL with the given MIME type.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.trim().is_empty() {
        FALLBACK_MIME
    } else {
        mime.trim()
    };
    format!("data:{mime};base64,{}", general_purpose::STANDARD.encode(bytes))
}

async fn read_file_as_bytes(file: &File) -> Result<Vec<u8>, String> {
    let file_reader =
        FileReader::new().map_err(|_| "Failed to create FileReader")?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let reader = file_reader.clone();
        let onerror_reject = reject.clone();
        let onload = Closure::once(move |_: Event| match reader.result() {
            Ok(array_buffer) => settle(&resolve, &array_buffer),
            Err(_) => settle(&reject, &JsValue::from_str("Failed to read file")),
        });

        let onerror = Closure::once(move |_: Event| {
            settle(&onerror_reject, &JsValue::from_str("Failed to read file"));
        });

        file_reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        file_reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onload.forget();
        onerror.forget();
    });

    file_reader
        .read_as_array_buffer(file)
        .map_err(|_| "Failed to start reading file")?;

    let result = JsFuture::from(promise)
        .await
        .map_err(|_| "Failed to read file")?;
    let array_buffer: js_sys::ArrayBuffer =
        result.dyn_into().map_err(|_| "Invalid file data")?;

    Ok(js_sys::Uint8Array::new(&array_buffer).to_vec())
}

/// Resolve or reject the read promise with `value`.
fn settle(callback: &js_sys::Function, value: &JsValue) {
    if callback.call1(&JsValue::NULL, value).is_err() {
        tracing::warn!("Could not settle file read promise");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_uses_file_mime() {
        assert_eq!(
            data_url("image/png", &[0x89, b'P', b'N', b'G']),
            "data:image/png;base64,iVBORw=="
        );
    }

    #[test]
    fn test_data_url_without_mime() {
        assert_eq!(
            data_url("", b"hi"),
            "data:application/octet-stream;base64,aGk="
        );
        assert_eq!(
            data_url("  ", b""),
            "data:application/octet-stream;base64,"
        );
    }
}
