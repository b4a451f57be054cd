//! Python extension module `koyama`.
//!
//! Exposes the discrete Koyama model as the class `DiscreteKoyama`. Construction failures and
//! evaluation failures are raised as subclasses of `ValueError`.

use koyama::core::omega::{DiscreteKoyama, Omega, OmegaError, PairCounting};
use pyo3::create_exception;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

create_exception!(
    koyama,
    InvalidPersistenceLengthError,
    PyValueError,
    "Persistence length below the 4/3 floor of the model."
);
create_exception!(
    koyama,
    SolverNonConvergenceError,
    PyValueError,
    "The bending energy could not be solved for."
);
create_exception!(
    koyama,
    InvalidChainParametersError,
    PyValueError,
    "The pair distribution is non-physical for some separation."
);

fn to_py_err(error: OmegaError) -> PyErr {
    let message = error.to_string();
    match error {
        OmegaError::InvalidPersistenceLength { .. } => {
            InvalidPersistenceLengthError::new_err(message)
        }
        OmegaError::SolverNonConvergence { .. } => SolverNonConvergenceError::new_err(message),
        OmegaError::InvalidChainParameters { .. } => InvalidChainParametersError::new_err(message),
        OmegaError::InvalidGeometry(_) => PyValueError::new_err(message),
    }
}

/// Semi-flexible chain under the discrete Koyama model.
///
/// `DiscreteKoyama(sigma, l, length, lp, all_pairs=False)` solves for the bending energy on
/// construction; `calculate(k)` returns ω(k) for a sequence of wavevector magnitudes.
#[pyclass(name = "DiscreteKoyama", module = "koyama", frozen)]
struct PyDiscreteKoyama {
    inner: DiscreteKoyama,
}

#[pymethods]
impl PyDiscreteKoyama {
    #[new]
    #[pyo3(signature = (sigma, l, length, lp, all_pairs = false))]
    fn new(sigma: f64, l: f64, length: usize, lp: f64, all_pairs: bool) -> PyResult<Self> {
        let pair_counting = if all_pairs {
            PairCounting::AllPairs
        } else {
            PairCounting::Reference
        };
        let inner = DiscreteKoyama::new(sigma, l, length, lp)
            .map_err(to_py_err)?
            .with_pair_counting(pair_counting);
        Ok(Self { inner })
    }

    fn calculate(&self, py: Python<'_>, k: Vec<f64>) -> PyResult<Vec<f64>> {
        py.allow_threads(|| self.inner.calculate(&k))
            .map_err(to_py_err)
    }

    fn cos_avg(&self, e: f64) -> f64 {
        self.inner.cos_avg(e)
    }

    fn cos_sq_avg(&self, e: f64) -> f64 {
        self.inner.cos_sq_avg(e)
    }

    #[getter]
    fn sigma(&self) -> f64 {
        self.inner.geometry().sigma()
    }

    #[getter]
    fn l(&self) -> f64 {
        self.inner.geometry().bond_length()
    }

    #[getter]
    fn length(&self) -> usize {
        self.inner.geometry().length()
    }

    #[getter]
    fn lp(&self) -> f64 {
        self.inner.geometry().persistence_length()
    }

    #[getter]
    fn cos0(&self) -> f64 {
        self.inner.parameters().cos0
    }

    #[getter]
    fn cos1(&self) -> f64 {
        self.inner.parameters().cos1
    }

    #[getter]
    fn epsilon(&self) -> f64 {
        self.inner.parameters().epsilon
    }

    #[getter]
    fn cos2(&self) -> f64 {
        self.inner.parameters().cos2
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

#[pymodule]
#[pyo3(name = "koyama")]
fn koyama_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();
    m.add_class::<PyDiscreteKoyama>()?;
    m.add(
        "InvalidPersistenceLengthError",
        py.get_type::<InvalidPersistenceLengthError>(),
    )?;
    m.add(
        "SolverNonConvergenceError",
        py.get_type::<SolverNonConvergenceError>(),
    )?;
    m.add(
        "InvalidChainParametersError",
        py.get_type::<InvalidChainParametersError>(),
    )?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
