// C ABI for hosts that embed the translator (web view shells, native UIs).
// Every returned string is owned by Rust and must go back through
// `morse_free_string`.
use crate::core::converter::{decode, encode};
use crate::core::engine::translate_auto;
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Reads a borrowed C string; null or invalid UTF-8 reads as empty.
unsafe fn read_input<'a>(input: *const c_char) -> &'a str {
    if input.is_null() {
        return "";
    }
    CStr::from_ptr(input).to_str().unwrap_or("")
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn guarded(label: &str, f: impl FnOnce() -> String, fallback: &str) -> *mut c_char {
    let out = catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|_| {
        tracing::error!("panic in {}", label);
        fallback.to_string()
    });
    into_c_string(out)
}

/// Auto-detects direction and returns the translation result as JSON.
///
/// # Safety
/// `input` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn morse_translate_auto(input: *const c_char) -> *mut c_char {
    let text = read_input(input);
    guarded(
        "translate_auto",
        || serde_json::to_string(&translate_auto(text)).unwrap_or_else(|_| "{}".to_string()),
        "{}",
    )
}

/// # Safety
/// `input` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn morse_encode(input: *const c_char) -> *mut c_char {
    let text = read_input(input);
    guarded("encode", || encode(text), "")
}

/// # Safety
/// `input` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn morse_decode(input: *const c_char) -> *mut c_char {
    let text = read_input(input);
    guarded("decode", || decode(text), "")
}

/// # Safety
/// `s` must be null or a pointer returned by this module, freed at most once.
#[no_mangle]
pub unsafe extern "C" fn morse_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = CString::from_raw(s);
    }
}
