//! Dynamic calling surface
//!
//! Scripting front ends call kernels by name with loosely typed argument
//! lists. [`Host::call`] validates argument counts and kinds, converts
//! [`Value`]s to typed arrays, runs the kernel and converts the results
//! back. Supported entry points:
//!
//! | name           | inputs                               | outputs          |
//! |----------------|--------------------------------------|------------------|
//! | `bwlabel`      | `bw [, n]` with n in {4, 6, 8}       | `labels, count`  |
//! | `bwlabeln`     | `bw [, conn]` (code or mask)         | `labels, count`  |
//! | `bwdist`       | `bw [, method]`                      | `dist, index`    |
//! | `conndef`      | `ndims, "minimal" \| "maximal"`      | `mask`           |
//! | `iptcheckconn` | `conn, func_name, var_name, arg_pos` | none             |
//!
//! Advisory warnings are collected per [`Host`] and reported once per kind.

use std::collections::HashSet;

use bwkit_core::NdArray;
use bwkit_distance::{DistanceOptions, Metric, distance_transform};
use bwkit_region::{Connectivity, ConnectivityType, LabelOptions, label, label_with_options};

use crate::error::{HostError, HostResult};

/// Loosely typed argument or result
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Real scalar
    Scalar(f64),
    /// Character string
    Text(String),
    /// Boolean array
    Logical(NdArray<bool>),
    /// Double-precision array
    Real(NdArray<f64>),
    /// Single-precision array
    Single(NdArray<f32>),
}

impl Value {
    fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Text(_) => "string",
            Self::Logical(_) => "logical array",
            Self::Real(_) => "real array",
            Self::Single(_) => "single array",
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<NdArray<bool>> for Value {
    fn from(a: NdArray<bool>) -> Self {
        Self::Logical(a)
    }
}

impl From<NdArray<f64>> for Value {
    fn from(a: NdArray<f64>) -> Self {
        Self::Real(a)
    }
}

/// Calling session
///
/// Tracks which warning kinds were already reported so each is surfaced
/// only on first occurrence.
#[derive(Debug, Default)]
pub struct Host {
    reported: HashSet<&'static str>,
    warnings: Vec<String>,
}

impl Host {
    /// Fresh session with no reported warnings
    pub fn new() -> Self {
        Self::default()
    }

    /// Warnings raised since the last call to this method
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    fn warn(&mut self, function: &str, kind: &'static str, message: impl std::fmt::Display) {
        if self.reported.insert(kind) {
            let warning = format!("{function}: {message}");
            log::warn!("{warning}");
            self.warnings.push(warning);
        } else {
            log::debug!("{function}: suppressed repeated {kind} warning");
        }
    }

    /// Invoke the entry point `name`
    ///
    /// # Arguments
    ///
    /// * `name` - Entry point name
    /// * `args` - Input arguments
    /// * `nargout` - Number of requested outputs; at least one output is
    ///   always returned by functions that produce any
    ///
    /// # Errors
    ///
    /// Returns [`HostError::UnknownFunction`], argument count or kind
    /// errors, or the kernel's error.
    pub fn call(&mut self, name: &str, args: &[Value], nargout: usize) -> HostResult<Vec<Value>> {
        match name {
            "bwlabel" => self.bwlabel(args, nargout),
            "bwlabeln" => self.bwlabeln(args, nargout),
            "bwdist" => self.bwdist(args, nargout),
            "conndef" => conndef(args, nargout),
            "iptcheckconn" => iptcheckconn(args, nargout),
            _ => Err(HostError::UnknownFunction(name.to_string())),
        }
    }

    fn bwlabel(&mut self, args: &[Value], nargout: usize) -> HostResult<Vec<Value>> {
        const NAME: &str = "bwlabel";
        check_counts(NAME, args, 1, 2, nargout, 2)?;
        let image = image_arg(NAME, &args[0])?;
        if image.ndim() != 2 {
            return Err(invalid(NAME, "BW must be a 2-D matrix"));
        }

        let connectivity = match args.get(1) {
            None => ConnectivityType::default(),
            Some(value) => {
                let code = scalar_arg(NAME, value, "second input argument")?;
                integer_code(code)
                    .and_then(ConnectivityType::from_code)
                    .ok_or_else(|| {
                        invalid(NAME, "second input argument must be either 4, 6 or 8")
                    })?
            }
        };

        let result = label(&image, connectivity)?;
        for warning in &result.warnings {
            self.warn(NAME, "non-binary-input", warning);
        }
        Ok(label_outputs(result.labels, result.count, nargout))
    }

    fn bwlabeln(&mut self, args: &[Value], nargout: usize) -> HostResult<Vec<Value>> {
        const NAME: &str = "bwlabeln";
        check_counts(NAME, args, 1, 2, nargout, 2)?;
        let image = image_arg(NAME, &args[0])?;

        let options = match args.get(1) {
            None => LabelOptions::new(),
            Some(value) => LabelOptions::new().with_connectivity(connectivity_arg(NAME, value)?),
        };

        let result = label_with_options(&image, &options)?;
        for warning in &result.warnings {
            self.warn(NAME, "non-binary-input", warning);
        }
        Ok(label_outputs(result.labels, result.count, nargout))
    }

    fn bwdist(&mut self, args: &[Value], nargout: usize) -> HostResult<Vec<Value>> {
        const NAME: &str = "bwdist";
        check_counts(NAME, args, 1, 2, nargout, 2)?;
        let image = image_arg(NAME, &args[0])?;
        if image.ndim() != 2 {
            return Err(invalid(NAME, "BW must be a matrix"));
        }

        let metric = match args.get(1) {
            None => Metric::default(),
            Some(Value::Text(method)) => {
                let (metric, warning) = Metric::resolve(method)?;
                if let Some(warning) = warning {
                    self.warn(NAME, "deprecated-metric-abbreviation", warning);
                }
                metric
            }
            Some(other) => {
                return Err(invalid(
                    NAME,
                    format!("METHOD must be a string, got {}", other.kind()),
                ));
            }
        };

        let options = DistanceOptions::new()
            .with_metric(metric)
            .with_index(nargout > 1);
        let map = distance_transform(&image, &options)?;
        for warning in &map.warnings {
            self.warn(NAME, "non-binary-input", warning);
        }

        let mut outputs = vec![Value::Single(map.distances)];
        if let Some(nearest) = map.nearest {
            outputs.push(Value::Real(nearest.map(|&i| i as f64)));
        }
        Ok(outputs)
    }
}

/// Invoke `name` in a one-off session
///
/// # Errors
///
/// See [`Host::call`].
pub fn call(name: &str, args: &[Value], nargout: usize) -> HostResult<Vec<Value>> {
    Host::new().call(name, args, nargout)
}

fn conndef(args: &[Value], nargout: usize) -> HostResult<Vec<Value>> {
    const NAME: &str = "conndef";
    check_counts(NAME, args, 2, 2, nargout, 1)?;

    let ndims = scalar_arg(NAME, &args[0], "NUM_DIMS")?;
    let ndims = integer_code(ndims)
        .filter(|&n| n > 0)
        .ok_or_else(|| invalid(NAME, "NUM_DIMS must be a positive integer"))?;

    let conn = match &args[1] {
        Value::Text(kind) if kind.eq_ignore_ascii_case("minimal") => {
            Connectivity::minimal(ndims as usize)?
        }
        Value::Text(kind) if kind.eq_ignore_ascii_case("maximal") => {
            Connectivity::maximal(ndims as usize)?
        }
        _ => return Err(invalid(NAME, "TYPE must be \"maximal\" or \"minimal\"")),
    };

    Ok(vec![Value::Logical(conn.mask().clone())])
}

fn iptcheckconn(args: &[Value], nargout: usize) -> HostResult<Vec<Value>> {
    const NAME: &str = "iptcheckconn";
    check_counts(NAME, args, 4, 4, nargout, 0)?;

    let func_name = text_arg(NAME, &args[1], "FUNC_NAME")?;
    let var_name = text_arg(NAME, &args[2], "VAR_NAME")?;
    let arg_pos = scalar_arg(NAME, &args[3], "ARG_POS")?;
    if integer_code(arg_pos).is_none_or(|p| p == 0) {
        return Err(invalid(NAME, "ARG_POS must be a positive integer"));
    }

    match connectivity_arg(func_name, &args[0]) {
        Ok(_) => Ok(Vec::new()),
        Err(HostError::Region(bwkit_region::RegionError::InvalidConnectivity(reason))) => {
            Err(invalid(func_name, format!("{var_name} {reason}")))
        }
        Err(err) => Err(err),
    }
}

fn check_counts(
    function: &str,
    args: &[Value],
    min: usize,
    max: usize,
    nargout: usize,
    max_out: usize,
) -> HostResult<()> {
    if args.len() < min || args.len() > max {
        return Err(HostError::InvalidArgumentCount {
            function: function.to_string(),
            min,
            max,
            actual: args.len(),
        });
    }
    if nargout > max_out.max(1) {
        return Err(HostError::TooManyOutputs {
            function: function.to_string(),
            max: max_out,
            requested: nargout,
        });
    }
    Ok(())
}

fn invalid(function: &str, message: impl Into<String>) -> HostError {
    HostError::InvalidArgument {
        function: function.to_string(),
        message: message.into(),
    }
}

/// Binary image argument as a double array
fn image_arg(function: &str, value: &Value) -> HostResult<NdArray<f64>> {
    match value {
        Value::Logical(a) => Ok(a.map(|&b| f64::from(u8::from(b)))),
        Value::Real(a) => Ok(a.clone()),
        Value::Single(a) => Ok(a.map(|&v| f64::from(v))),
        Value::Scalar(v) => Ok(NdArray::from_vec(&[1, 1], vec![*v])?),
        Value::Text(_) => Err(invalid(function, "BW must be a numeric or logical array")),
    }
}

fn scalar_arg(function: &str, value: &Value, what: &str) -> HostResult<f64> {
    match value {
        Value::Scalar(v) => Ok(*v),
        other => Err(invalid(
            function,
            format!("{what} must be a real scalar, got {}", other.kind()),
        )),
    }
}

fn text_arg<'a>(function: &str, value: &'a Value, what: &str) -> HostResult<&'a str> {
    match value {
        Value::Text(s) => Ok(s),
        other => Err(invalid(
            function,
            format!("{what} must be a string, got {}", other.kind()),
        )),
    }
}

/// `v` as a non-negative integer, if it is one
fn integer_code(v: f64) -> Option<u32> {
    (v.fract() == 0.0 && v >= 0.0 && v <= f64::from(u32::MAX)).then_some(v as u32)
}

/// Connectivity given as a numeric code or a mask
fn connectivity_arg(function: &str, value: &Value) -> HostResult<Connectivity> {
    let conn = match value {
        Value::Scalar(v) => {
            let code = integer_code(*v).ok_or_else(|| {
                bwkit_region::RegionError::InvalidConnectivity(
                    "must be in the set [4 6 8 18 26]".to_string(),
                )
            })?;
            Connectivity::from_code(code)?
        }
        Value::Logical(mask) => Connectivity::from_mask(mask.clone())?,
        Value::Real(mask) => Connectivity::from_values(mask)?,
        Value::Single(mask) => Connectivity::from_values(mask)?,
        Value::Text(_) => {
            return Err(invalid(
                function,
                "connectivity must be a real scalar or a logical array",
            ));
        }
    };
    Ok(conn)
}

fn label_outputs(labels: NdArray<u32>, count: u32, nargout: usize) -> Vec<Value> {
    let mut outputs = vec![Value::Real(labels.map(|&l| f64::from(l)))];
    if nargout > 1 {
        outputs.push(Value::Scalar(f64::from(count)));
    }
    outputs
}
