use crate::core::base::*;
use crate::core::error::*;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};

/// Named, typed parameter lists used to configure a kernel by name.
///
/// Lookups are recorded so parameters nobody asked for can be reported.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ParamSet {
    #[serde(default)]
    pub ints: BTreeMap<String, Vec<i32>>,
    #[serde(default)]
    pub floats: BTreeMap<String, Vec<Float>>,
    #[serde(default)]
    pub strings: BTreeMap<String, Vec<String>>,
    #[serde(skip)]
    looked_up: RefCell<HashSet<String>>,
}

fn get_key_name(key: &str) -> String {
    let ss: Vec<&str> = key.split_ascii_whitespace().collect();
    match ss.len() {
        2 => String::from(ss[1]),
        _ => String::from(key),
    }
}

fn add_values<T: Clone>(m: &mut BTreeMap<String, Vec<T>>, key: &str, v: &[T]) {
    let keyname = get_key_name(key);
    let items = m.entry(keyname).or_default();
    items.clear();
    items.extend_from_slice(v);
}

impl ParamSet {
    pub fn new() -> Self {
        ParamSet::default()
    }

    /// Loads a flat JSON object; numbers become floats and strings become
    /// strings. Arrays of either are accepted as multi-valued parameters.
    pub fn from_json(text: &str) -> Result<Self, FilterError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let obj = match value.as_object() {
            Some(obj) => obj,
            None => return Err(FilterError::error("Parameters must be a JSON object.")),
        };
        let mut params = ParamSet::new();
        for (key, v) in obj.iter() {
            params.add_json_value(key, v)?;
        }
        return Ok(params);
    }

    fn add_json_value(&mut self, key: &str, v: &serde_json::Value) -> Result<(), FilterError> {
        use serde_json::Value;
        match v {
            Value::Number(n) => {
                let f = n.as_f64().unwrap_or(0.0) as Float;
                self.add_float(key, f);
            }
            Value::String(s) => self.add_string(key, s),
            Value::Array(items) => {
                if items.iter().all(|x| x.is_number()) {
                    let fs: Vec<Float> = items
                        .iter()
                        .filter_map(|x| x.as_f64())
                        .map(|x| x as Float)
                        .collect();
                    self.add_floats(key, &fs);
                } else if items.iter().all(|x| x.is_string()) {
                    let ss: Vec<&str> = items.iter().filter_map(|x| x.as_str()).collect();
                    self.add_strings(key, &ss);
                } else {
                    let msg = format!("Parameter \"{}\" mixes value types.", key);
                    return Err(FilterError::error(&msg));
                }
            }
            _ => {
                let msg = format!("Parameter \"{}\" has an unsupported type.", key);
                return Err(FilterError::error(&msg));
            }
        }
        return Ok(());
    }

    pub fn add_int(&mut self, key: &str, v: i32) {
        add_values(&mut self.ints, key, &[v]);
    }

    pub fn add_ints(&mut self, key: &str, v: &[i32]) {
        add_values(&mut self.ints, key, v);
    }

    pub fn add_float(&mut self, key: &str, v: Float) {
        add_values(&mut self.floats, key, &[v]);
    }

    pub fn add_floats(&mut self, key: &str, v: &[Float]) {
        add_values(&mut self.floats, key, v);
    }

    pub fn add_string(&mut self, key: &str, v: &str) {
        add_values(&mut self.strings, key, &[String::from(v)]);
    }

    pub fn add_strings(&mut self, key: &str, v: &[&str]) {
        let v: Vec<String> = v.iter().map(|s| String::from(*s)).collect();
        add_values(&mut self.strings, key, &v);
    }

    pub fn is_empty(&self) -> bool {
        self.ints.is_empty() && self.floats.is_empty() && self.strings.is_empty()
    }

    fn mark(&self, keyname: &str) {
        self.looked_up.borrow_mut().insert(String::from(keyname));
    }

    pub fn find_one_int(&self, key: &str, value: i32) -> i32 {
        let keyname = get_key_name(key);
        match self.ints.get(&keyname).and_then(|v| v.first()) {
            Some(v) => {
                self.mark(&keyname);
                *v
            }
            None => value,
        }
    }

    pub fn find_one_float(&self, key: &str, value: Float) -> Float {
        let keyname = get_key_name(key);
        match self.floats.get(&keyname).and_then(|v| v.first()) {
            Some(v) => {
                self.mark(&keyname);
                *v
            }
            None => value,
        }
    }

    pub fn find_one_string(&self, key: &str, value: &str) -> String {
        let keyname = get_key_name(key);
        match self.strings.get(&keyname).and_then(|v| v.first()) {
            Some(v) => {
                self.mark(&keyname);
                v.clone()
            }
            None => String::from(value),
        }
    }

    /// Names of parameters that were set but never looked up.
    pub fn unused(&self) -> Vec<String> {
        let looked_up = self.looked_up.borrow();
        self.ints
            .keys()
            .chain(self.floats.keys())
            .chain(self.strings.keys())
            .filter(|k| !looked_up.contains(*k))
            .cloned()
            .collect()
    }

    pub fn report_unused(&self) -> bool {
        let unused = self.unused();
        for k in unused.iter() {
            log::warn!("Parameter \"{}\" not used.", k);
        }
        return unused.is_empty();
    }
}
