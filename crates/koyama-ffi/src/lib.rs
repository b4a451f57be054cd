//! C ABI for the discrete Koyama structure factor.
//!
//! Models are opaque heap objects created with [`koyama_model_new`] and released with
//! [`koyama_model_free`]. Every fallible call returns a status code; on failure a description
//! is available from [`koyama_last_error_message`] on the same thread until the next failing
//! call.

use koyama::core::omega::{DiscreteKoyama, Omega, OmegaError};
use std::cell::RefCell;
use std::ffi::{CString, c_char};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::ptr;

pub const KOYAMA_OK: i32 = 0;
pub const KOYAMA_ERR_NULL_POINTER: i32 = 1;
pub const KOYAMA_ERR_INVALID_PERSISTENCE_LENGTH: i32 = 2;
pub const KOYAMA_ERR_INVALID_GEOMETRY: i32 = 3;
pub const KOYAMA_ERR_SOLVER_NON_CONVERGENCE: i32 = 4;
pub const KOYAMA_ERR_INVALID_CHAIN_PARAMETERS: i32 = 5;
pub const KOYAMA_ERR_PANIC: i32 = 99;

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Opaque handle to a solved model.
pub struct KoyamaModel {
    inner: DiscreteKoyama,
}

fn set_last_error(message: &str) {
    let message = CString::new(message.replace('\0', " ")).unwrap_or_default();
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(message));
}

fn clear_last_error() {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = None);
}

fn status_for(error: &OmegaError) -> i32 {
    match error {
        OmegaError::InvalidPersistenceLength { .. } => KOYAMA_ERR_INVALID_PERSISTENCE_LENGTH,
        OmegaError::InvalidGeometry(_) => KOYAMA_ERR_INVALID_GEOMETRY,
        OmegaError::SolverNonConvergence { .. } => KOYAMA_ERR_SOLVER_NON_CONVERGENCE,
        OmegaError::InvalidChainParameters { .. } => KOYAMA_ERR_INVALID_CHAIN_PARAMETERS,
    }
}

fn report(error: &OmegaError) -> i32 {
    set_last_error(&error.to_string());
    status_for(error)
}

fn guarded<F>(body: F) -> i32
where
    F: FnOnce() -> i32,
{
    match catch_unwind(AssertUnwindSafe(body)) {
        Ok(status) => status,
        Err(_) => {
            set_last_error("internal panic in koyama");
            KOYAMA_ERR_PANIC
        }
    }
}

/// Validates the chain, solves for the bending energy and stores a new model in `*out`.
///
/// # Safety
///
/// `out` must be null or point to writable storage for one pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn koyama_model_new(
    sigma: f64,
    bond_length: f64,
    length: usize,
    persistence_length: f64,
    out: *mut *mut KoyamaModel,
) -> i32 {
    if out.is_null() {
        set_last_error("output pointer is null");
        return KOYAMA_ERR_NULL_POINTER;
    }
    guarded(|| {
        match DiscreteKoyama::new(sigma, bond_length, length, persistence_length) {
            Ok(inner) => {
                clear_last_error();
                let model = Box::into_raw(Box::new(KoyamaModel { inner }));
                // SAFETY: `out` was checked for null and the caller guarantees it is writable.
                unsafe { *out = model };
                KOYAMA_OK
            }
            Err(e) => {
                // SAFETY: as above.
                unsafe { *out = ptr::null_mut() };
                report(&e)
            }
        }
    })
}

/// Evaluates ω(k) for `len` wavevectors from `k` into `omega`.
///
/// Nothing is written to `omega` unless the call succeeds.
///
/// # Safety
///
/// `model` must come from [`koyama_model_new`] and not have been freed. `k` and `omega` must
/// each be valid for `len` doubles (they may be null when `len` is zero) and must not overlap.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn koyama_model_calculate(
    model: *const KoyamaModel,
    k: *const f64,
    len: usize,
    omega: *mut f64,
) -> i32 {
    if model.is_null() || (len > 0 && (k.is_null() || omega.is_null())) {
        set_last_error("model, k or omega pointer is null");
        return KOYAMA_ERR_NULL_POINTER;
    }
    guarded(|| {
        // SAFETY: pointers were checked for null; validity is the caller's contract.
        let model = unsafe { &*model };
        let k: &[f64] = if len == 0 {
            &[]
        } else {
            unsafe { std::slice::from_raw_parts(k, len) }
        };

        match model.inner.calculate(k) {
            Ok(values) => {
                if len > 0 {
                    // SAFETY: `omega` holds `len` doubles and does not overlap `k`.
                    let out = unsafe { std::slice::from_raw_parts_mut(omega, len) };
                    out.copy_from_slice(&values);
                }
                clear_last_error();
                KOYAMA_OK
            }
            Err(e) => report(&e),
        }
    })
}

/// Solved bending energy of `model`, or NaN for a null handle.
///
/// # Safety
///
/// `model` must be null or come from [`koyama_model_new`] and not have been freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn koyama_model_epsilon(model: *const KoyamaModel) -> f64 {
    match unsafe { model.as_ref() } {
        Some(model) => model.inner.epsilon(),
        None => f64::NAN,
    }
}

/// Second bond-angle moment of `model`, or NaN for a null handle.
///
/// # Safety
///
/// Same contract as [`koyama_model_epsilon`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn koyama_model_cos2(model: *const KoyamaModel) -> f64 {
    match unsafe { model.as_ref() } {
        Some(model) => model.inner.parameters().cos2,
        None => f64::NAN,
    }
}

/// Releases a model. Null is ignored.
///
/// # Safety
///
/// `model` must be null or come from [`koyama_model_new`], and must not be used afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn koyama_model_free(model: *mut KoyamaModel) {
    if !model.is_null() {
        drop(unsafe { Box::from_raw(model) });
    }
}

/// Message of the last failure on this thread, or null if the last call succeeded.
///
/// The string is owned by the library and stays valid until the next call on this thread.
#[unsafe(no_mangle)]
pub extern "C" fn koyama_last_error_message() -> *const c_char {
    LAST_ERROR.with(|slot| {
        slot.borrow()
            .as_ref()
            .map_or(ptr::null(), |message| message.as_ptr())
    })
}
