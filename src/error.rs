use std::fmt;
use wasm_bindgen::JsValue;

/// Failures raised while wiring behaviors to the page.
///
/// Missing optional elements are never reported through this type; the
/// corresponding behavior is simply not attached.
#[derive(Debug, Clone, PartialEq)]
pub enum BehaviorError {
    NoWindow,
    NoDocument,
    /// A DOM call threw; holds the stringified JS value.
    Js(String),
    InvalidConfig(String),
    InvalidCounterTarget(String),
}

impl fmt::Display for BehaviorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BehaviorError::NoWindow => write!(f, "No global window available"),
            BehaviorError::NoDocument => write!(f, "Window has no document"),
            BehaviorError::Js(msg) => write!(f, "DOM call failed: {}", msg),
            BehaviorError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            BehaviorError::InvalidCounterTarget(raw) => {
                write!(f, "Counter target '{}' is not an integer", raw)
            }
        }
    }
}

impl std::error::Error for BehaviorError {}

impl From<JsValue> for BehaviorError {
    fn from(value: JsValue) -> Self {
        BehaviorError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

impl From<BehaviorError> for JsValue {
    fn from(err: BehaviorError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Log every failed attachment in `results` and return the names that
/// failed. Each result is produced before this runs, so one failure never
/// keeps a later behavior from attaching.
pub fn log_failures<'a, I>(results: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = (&'a str, Result<(), BehaviorError>)>,
{
    let mut failed = Vec::new();
    for (name, result) in results {
        if let Err(e) = result {
            log::error!("Failed to attach {}: {}", name, e);
            failed.push(name);
        }
    }
    failed
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_failure_is_reported_and_successes_are_not() {
        let mut attached = Vec::new();
        let mut attach = |name: &'static str, fail: bool| {
            attached.push(name);
            let result = if fail { Err(BehaviorError::Js(format!("{} threw", name))) } else { Ok(()) };
            (name, result)
        };
        let results = [attach("skill bars", true), attach("counters", false), attach("lazy images", true)];
        assert_eq!(log_failures(results), vec!["skill bars", "lazy images"]);
        // The first failure did not stop the later behaviors from attaching.
        assert_eq!(attached, vec!["skill bars", "counters", "lazy images"]);
    }

    #[test]
    fn nothing_failed_reports_nothing() {
        assert!(log_failures([("menu", Ok(())), ("forms", Ok(()))]).is_empty());
    }
}
