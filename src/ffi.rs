//! FFI bindings for Mindful Mentor
//!
//! This module provides C-compatible functions so a native UI layer can own
//! the screens while the scoring and navigation rules live here.
//! All functions use C strings (null-terminated) and return allocated memory
//! that must be freed by the caller using `mentor_free_string`.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::navigation::ScreenKind;
use crate::pipeline::{questionnaire_to_report, MentorSession};
use crate::types::Dimension;

// Thread-local storage for the last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Set the last error message
fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Clear the last error message
fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Helper to convert C string to Rust string
unsafe fn cstr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

/// Helper to convert Rust string to C string (caller must free)
fn string_to_cstr(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

// ============================================================================
// Stateless API
// ============================================================================

/// Score questionnaire answers JSON and return a score report JSON.
///
/// # Safety
/// - `json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `mentor_free_string`.
/// - Returns NULL on error; call `mentor_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn mentor_score_json(json: *const c_char) -> *mut c_char {
    clear_last_error();

    let json_str = match cstr_to_string(json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid JSON string pointer");
            return ptr::null_mut();
        }
    };

    match questionnaire_to_report(json_str) {
        Ok(report) => string_to_cstr(&report),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

// ============================================================================
// Session API
// ============================================================================

/// Opaque handle to a MentorSession
pub struct MentorSessionHandle {
    session: MentorSession,
}

/// Create a new session on the Welcome screen.
///
/// # Safety
/// - Returns a pointer to a newly allocated session.
/// - Must be freed with `mentor_session_free`.
#[no_mangle]
pub unsafe extern "C" fn mentor_session_new() -> *mut MentorSessionHandle {
    clear_last_error();

    let handle = Box::new(MentorSessionHandle {
        session: MentorSession::new(),
    });
    Box::into_raw(handle)
}

/// Free a session.
///
/// # Safety
/// - `session` must be a valid pointer returned by `mentor_session_new`.
/// - After calling this function, the pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn mentor_session_free(session: *mut MentorSessionHandle) {
    if !session.is_null() {
        drop(Box::from_raw(session));
    }
}

/// Move from the Welcome screen to the Questionnaire.
///
/// # Safety
/// - `session` must be a valid pointer returned by `mentor_session_new`.
/// - Returns 0 on success, -1 on error; call `mentor_last_error` for details.
#[no_mangle]
pub unsafe extern "C" fn mentor_session_get_started(session: *mut MentorSessionHandle) -> i32 {
    clear_last_error();

    if session.is_null() {
        set_last_error("Null session pointer");
        return -1;
    }

    let handle = &mut *session;
    match handle.session.get_started() {
        Ok(()) => 0,
        Err(e) => {
            set_last_error(&e.to_string());
            -1
        }
    }
}

/// Answer one question on the Questionnaire screen.
///
/// `dimension` is one of "sleep", "stress", "mood", "activity". For activity
/// any non-zero value means yes. Slider values are clamped to their range.
///
/// # Safety
/// - `session` must be a valid pointer returned by `mentor_session_new`.
/// - `dimension` must be a valid null-terminated C string.
/// - Returns the value the control settled on, or -1.0 on error; call
///   `mentor_last_error` for details.
#[no_mangle]
pub unsafe extern "C" fn mentor_session_set_answer(
    session: *mut MentorSessionHandle,
    dimension: *const c_char,
    value: f64,
) -> f64 {
    clear_last_error();

    if session.is_null() {
        set_last_error("Null session pointer");
        return -1.0;
    }

    let handle = &mut *session;

    let dimension = match cstr_to_string(dimension).map(|s| s.parse::<Dimension>()) {
        Some(Ok(d)) => d,
        Some(Err(e)) => {
            set_last_error(&e.to_string());
            return -1.0;
        }
        None => {
            set_last_error("Invalid dimension string pointer");
            return -1.0;
        }
    };

    match handle.session.set_answer(dimension, value) {
        Ok(settled) => settled,
        Err(e) => {
            set_last_error(&e.to_string());
            -1.0
        }
    }
}

/// Submit the questionnaire and return the score report JSON.
///
/// # Safety
/// - `session` must be a valid pointer returned by `mentor_session_new`.
/// - Returns a newly allocated string that must be freed with `mentor_free_string`.
/// - Returns NULL on error; call `mentor_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn mentor_session_submit(session: *mut MentorSessionHandle) -> *mut c_char {
    clear_last_error();

    if session.is_null() {
        set_last_error("Null session pointer");
        return ptr::null_mut();
    }

    let handle = &mut *session;
    match handle.session.submit() {
        Ok(report) => string_to_cstr(&report),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Pop back one screen.
///
/// # Safety
/// - `session` must be a valid pointer returned by `mentor_session_new`.
/// - Returns 0 when a screen was popped, 1 when already on Welcome, -1 on error.
#[no_mangle]
pub unsafe extern "C" fn mentor_session_back(session: *mut MentorSessionHandle) -> i32 {
    clear_last_error();

    if session.is_null() {
        set_last_error("Null session pointer");
        return -1;
    }

    let handle = &mut *session;
    match handle.session.back() {
        Some(_) => 0,
        None => 1,
    }
}

/// Get the name of the active screen: "welcome", "questionnaire" or "score".
///
/// # Safety
/// - `session` must be a valid pointer returned by `mentor_session_new`.
/// - Returns a pointer to a static string. Do NOT free.
/// - Returns NULL on error; call `mentor_last_error` for details.
#[no_mangle]
pub unsafe extern "C" fn mentor_session_screen(session: *const MentorSessionHandle) -> *const c_char {
    clear_last_error();

    if session.is_null() {
        set_last_error("Null session pointer");
        return ptr::null();
    }

    let handle = &*session;
    let name: &'static [u8] = match handle.session.screen() {
        ScreenKind::Welcome => b"welcome\0",
        ScreenKind::Questionnaire => b"questionnaire\0",
        ScreenKind::Score => b"score\0",
    };
    name.as_ptr() as *const c_char
}

// ============================================================================
// Memory Management
// ============================================================================

/// Free a string returned by Mentor functions.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by a Mentor function, or NULL.
/// - After calling this function, the pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn mentor_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Get the last error message.
///
/// # Safety
/// - Returns a pointer to a thread-local error string.
/// - The returned pointer is valid until the next Mentor function call on this thread.
/// - Do NOT free the returned pointer.
/// - Returns NULL if no error occurred.
#[no_mangle]
pub unsafe extern "C" fn mentor_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(cstr) => cstr.as_ptr(),
        None => ptr::null(),
    })
}

// ============================================================================
// Version Information
// ============================================================================

/// Get the library version.
///
/// # Safety
/// - Returns a pointer to a static string. Do NOT free.
#[no_mangle]
pub unsafe extern "C" fn mentor_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
