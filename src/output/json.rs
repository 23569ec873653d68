// Fri Jan 23 2026 - Alex

use crate::output::OutputError;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const DEFAULT_INDENT: usize = 4;

pub struct JsonSerializer {
    pretty_print: bool,
    indent_size: usize,
    sort_keys: bool,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self {
            pretty_print: true,
            indent_size: DEFAULT_INDENT,
            sort_keys: true,
        }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_indent_size(mut self, size: usize) -> Self {
        self.indent_size = size;
        self
    }

    pub fn with_sort_keys(mut self, sort: bool) -> Self {
        self.sort_keys = sort;
        self
    }

    pub fn serialize<T: Serialize + ?Sized>(&self, output: &T) -> Result<String, OutputError> {
        let mut value = serde_json::to_value(output)?;
        if self.sort_keys {
            value = sort_keys(value);
        }

        if !self.pretty_print {
            return Ok(serde_json::to_string(&value)?);
        }

        let indent = vec![b' '; self.indent_size];
        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
        value.serialize(&mut serializer)?;

        // serde_json only ever emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn serialize_to_file<T, P>(&self, output: &T, path: P) -> Result<(), OutputError>
    where
        T: Serialize + ?Sized,
        P: AsRef<Path>,
    {
        let json_str = self.serialize(output)?;

        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        writer.write_all(json_str.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(())
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> = map.into_iter().map(|(k, v)| (k, sort_keys(v))).collect();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

pub fn to_json_string<T: Serialize + ?Sized>(output: &T) -> Result<String, OutputError> {
    JsonSerializer::new().serialize(output)
}

pub fn to_json_file<T: Serialize + ?Sized, P: AsRef<Path>>(output: &T, path: P) -> Result<(), OutputError> {
    JsonSerializer::new().serialize_to_file(output, path)
}
