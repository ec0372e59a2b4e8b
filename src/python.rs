//! Python bindings

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyString};

use crate::career::{self, Education};
use crate::character::Gender;
use crate::error::KowLifeError;
use crate::simulator::{LifeEngine, LifeSession};

// ============================================================================
// Cached Configuration
// ============================================================================

/// Global engine shared by every session created from Python
static CACHED_ENGINE: OnceCell<RwLock<Arc<LifeEngine>>> = OnceCell::new();

fn cached_engine() -> PyResult<Arc<LifeEngine>> {
    CACHED_ENGINE
        .get()
        .map(|lock| lock.read().clone())
        .ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(
                "Config not initialized. Call init_config() first.",
            )
        })
}

fn parse_gender(gender: &str) -> PyResult<Gender> {
    Ok(gender.parse::<Gender>()?)
}

// ============================================================================
// Python Functions
// ============================================================================

/// Initialize the engine (call once at startup, again to replace it)
///
/// # Arguments
/// * `config` - Optional catalog configuration, as a JSON string or a dict
///   with the same shape. The built-in catalog is used when omitted.
#[pyfunction]
#[pyo3(signature = (config=None))]
fn init_config(py: Python<'_>, config: Option<&Bound<'_, PyAny>>) -> PyResult<()> {
    let engine = match config {
        None => LifeEngine::default(),
        Some(obj) if obj.is_instance_of::<PyString>() => {
            LifeEngine::from_json(&obj.extract::<String>()?)?
        }
        Some(obj) if obj.is_instance_of::<PyDict>() => {
            let json: String = py.import("json")?.call_method1("dumps", (obj,))?.extract()?;
            LifeEngine::from_json(&json)?
        }
        Some(_) => {
            return Err(KowLifeError::InvalidConfig(
                "config must be a JSON string or a dict".to_string(),
            )
            .into())
        }
    };

    log::info!(
        "engine initialized: {} events, max age {}",
        engine.catalog().len(),
        engine.config().max_age
    );

    let engine = Arc::new(engine);
    let lock = CACHED_ENGINE.get_or_init(|| RwLock::new(engine.clone()));
    *lock.write() = engine;

    Ok(())
}

/// Check if config is initialized
#[pyfunction]
fn is_config_initialized() -> bool {
    CACHED_ENGINE.get().is_some()
}

/// Create a newborn and return its session
///
/// # Raises
/// RuntimeError if `init_config` was not called first
#[pyfunction]
#[pyo3(signature = (name, country, gender="Male"))]
fn create_character(name: &str, country: &str, gender: &str) -> PyResult<LifeSession> {
    let engine = cached_engine()?;
    Ok(LifeSession::start(engine, name, country, parse_gender(gender)?))
}

/// Create a random newborn and return its session
#[pyfunction]
fn create_random_character() -> PyResult<LifeSession> {
    Ok(LifeSession::start_random(cached_engine()?))
}

/// Create a character and play its whole life
#[pyfunction]
#[pyo3(signature = (name, country, gender="Male"))]
fn simulate_full_life(name: &str, country: &str, gender: &str) -> PyResult<LifeSession> {
    let mut session = LifeSession::start(cached_engine()?, name, country, parse_gender(gender)?);
    session.finish();
    Ok(session)
}

/// Play a whole life on a blocking worker thread
///
/// # Returns
/// A Python awaitable that resolves to a finished LifeSession
///
/// # Example (Python)
/// ```python
/// session = await simulate_async("Ava", "Japan", "Female")
/// print(session.age, session.recent_log)
/// ```
#[pyfunction]
#[pyo3(signature = (name, country, gender="Male"))]
fn simulate_async<'py>(
    py: Python<'py>,
    name: String,
    country: String,
    gender: &str,
) -> PyResult<Bound<'py, PyAny>> {
    let engine = cached_engine()?;
    let gender = parse_gender(gender)?;

    pyo3_async_runtimes::tokio::future_into_py(py, async move {
        let session = tokio::task::spawn_blocking(move || {
            let mut session = LifeSession::start(engine, &name, &country, gender);
            session.finish();
            session
        })
        .await
        .map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Simulation task panicked: {}",
                e
            ))
        })?;

        Ok(session)
    })
}

// ============================================================================
// PyMethods Implementation
// ============================================================================

#[pymethods]
impl LifeSession {
    #[getter]
    fn name(&self) -> String {
        self.character().name().to_string()
    }

    #[getter]
    fn country(&self) -> String {
        self.character().country().to_string()
    }

    #[getter]
    fn gender(&self) -> String {
        self.character().gender().to_string()
    }

    #[getter]
    fn age(&self) -> u32 {
        self.character().age()
    }

    #[getter]
    fn attributes(&self) -> HashMap<String, i32> {
        self.character().attributes().to_map()
    }

    #[getter]
    fn event_log(&self) -> Vec<String> {
        self.character().event_log().to_vec()
    }

    #[getter(recent_log)]
    fn py_recent_log(&self) -> Vec<String> {
        self.recent_log().to_vec()
    }

    #[getter]
    fn education(&self) -> Vec<String> {
        self.character()
            .education()
            .iter()
            .map(|e| e.label().to_string())
            .collect()
    }

    /// (job, salary) or None
    #[getter]
    fn career(&self) -> Option<(String, u32)> {
        self.character()
            .career()
            .map(|c| (c.job.clone(), c.salary))
    }

    #[getter]
    fn available_careers(&self) -> Vec<String> {
        career::available_careers(self.character())
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Text of the milestone reached on the last age-up, if any
    #[getter]
    fn milestone(&self) -> Option<String> {
        self.last_milestone().map(|m| m.milestone_text().to_string())
    }

    #[getter(is_complete)]
    fn py_is_complete(&self) -> bool {
        self.is_complete()
    }

    #[getter(stats_line)]
    fn py_stats_line(&self) -> String {
        self.stats_line()
    }

    /// Advance one year; returns the new log line or None past the cap
    #[pyo3(name = "age_up")]
    fn py_age_up(&mut self) -> Option<String> {
        self.age_up()
    }

    /// Play out the rest of the life; returns the new log lines
    #[pyo3(name = "finish")]
    fn py_finish(&mut self) -> Vec<String> {
        self.finish().log_lines
    }

    #[pyo3(name = "choose_education")]
    fn py_choose_education(&mut self, level: &str) -> PyResult<()> {
        let level: Education = level.parse()?;
        Ok(self.enroll(level)?)
    }

    #[pyo3(name = "choose_career")]
    fn py_choose_career(&mut self, job: &str) -> PyResult<()> {
        Ok(self.take_job(job)?)
    }

    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(self.character())
            .map_err(|e| KowLifeError::from(e).into())
    }

    fn __repr__(&self) -> String {
        let c = self.character();
        format!("LifeSession(name={:?}, age={}, {})", c.name(), c.age(), self.stats_line())
    }
}

// ============================================================================
// Python Module Definition
// ============================================================================

#[pymodule]
fn kowlife_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_config, m)?)?;
    m.add_function(wrap_pyfunction!(is_config_initialized, m)?)?;
    m.add_function(wrap_pyfunction!(create_character, m)?)?;
    m.add_function(wrap_pyfunction!(create_random_character, m)?)?;
    m.add_function(wrap_pyfunction!(simulate_full_life, m)?)?;
    m.add_function(wrap_pyfunction!(simulate_async, m)?)?;
    m.add_class::<LifeSession>()?;
    Ok(())
}
