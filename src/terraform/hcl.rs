//! Minimal HCL text writer for resource and import blocks

use std::collections::BTreeMap;

use crate::config::terraform::SECRET_PLACEHOLDER;

const INDENT: &str = "  ";

/// Escape a value for use inside a double-quoted HCL string
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '$' | '%' if chars.peek() == Some(&'{') => {
                out.push(c);
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Quote and escape a string literal
pub fn quote(value: &str) -> String {
    format!("\"{}\"", escape(value))
}

/// Symbolic reference to the `id` attribute of another resource
pub fn id_reference(resource_type: &str, terraform_id: &str) -> String {
    format!("{}.{}.id", resource_type, terraform_id)
}

/// Builds the lines of a single `resource` block
#[derive(Debug)]
pub struct BlockWriter {
    lines: Vec<String>,
    depth: usize,
}

impl BlockWriter {
    /// Open `resource "<resource_type>" "<name>" {`
    pub fn resource(resource_type: &str, name: &str) -> Self {
        Self {
            lines: vec![format!("resource \"{}\" \"{}\" {{", resource_type, name)],
            depth: 1,
        }
    }

    fn push(&mut self, line: String) {
        self.lines
            .push(format!("{}{}", INDENT.repeat(self.depth), line));
    }

    /// Write a raw expression without quoting
    pub fn expression(&mut self, key: &str, expression: &str) -> &mut Self {
        self.push(format!("{} = {}", key, expression));
        self
    }

    pub fn string(&mut self, key: &str, value: &str) -> &mut Self {
        self.expression(key, &quote(value))
    }

    /// Write a string attribute only when a value is present
    pub fn opt_string(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.string(key, value);
        }
        self
    }

    pub fn bool(&mut self, key: &str, value: bool) -> &mut Self {
        self.expression(key, if value { "true" } else { "false" })
    }

    pub fn number(&mut self, key: &str, value: u64) -> &mut Self {
        self.expression(key, &value.to_string())
    }

    /// Write an empty secret attribute with a fill-in comment
    pub fn secret(&mut self, key: &str) -> &mut Self {
        self.push(format!("{} = \"\" {}", key, SECRET_PLACEHOLDER));
        self
    }

    /// Write a multi-line string as an indented heredoc
    pub fn heredoc(&mut self, key: &str, value: &str) -> &mut Self {
        let mut delimiter = String::from("EOT");
        while value.lines().any(|line| line.trim() == delimiter) {
            delimiter.push('_');
        }
        self.push(format!("{} = <<-{}", key, delimiter));
        self.depth += 1;
        for line in value.lines() {
            let line = line.replace("${", "$${").replace("%{", "%%{");
            if line.is_empty() {
                self.lines.push(String::new());
            } else {
                self.push(line);
            }
        }
        self.depth -= 1;
        self.push(delimiter);
        self
    }

    /// Write `key = { ... }` with the attributes added by `body`
    pub fn object(&mut self, key: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.push(format!("{} = {{", key));
        self.depth += 1;
        body(self);
        self.depth -= 1;
        self.push("}".to_string());
        self
    }

    /// Write `key = [ { ... }, ... ]` with one object per item
    pub fn object_list<T>(
        &mut self,
        key: &str,
        items: &[T],
        mut body: impl FnMut(&mut Self, &T),
    ) -> &mut Self {
        if items.is_empty() {
            return self.expression(key, "[]");
        }
        self.push(format!("{} = [", key));
        self.depth += 1;
        for item in items {
            self.push("{".to_string());
            self.depth += 1;
            body(self, item);
            self.depth -= 1;
            self.push("},".to_string());
        }
        self.depth -= 1;
        self.push("]".to_string());
        self
    }

    /// Write a map of string values
    pub fn string_map(&mut self, key: &str, map: &BTreeMap<String, String>) -> &mut Self {
        if map.is_empty() {
            return self.expression(key, "{}");
        }
        self.object(key, |w| {
            for (k, v) in map {
                w.push(format!("{} = {}", quote(k), quote(v)));
            }
        })
    }

    /// Write a map of string lists
    pub fn list_map(&mut self, key: &str, map: &BTreeMap<String, Vec<String>>) -> &mut Self {
        if map.is_empty() {
            return self.expression(key, "{}");
        }
        self.object(key, |w| {
            for (k, values) in map {
                let values: Vec<String> = values.iter().map(|v| quote(v)).collect();
                w.push(format!("{} = [{}]", quote(k), values.join(", ")));
            }
        })
    }

    /// Close the block and return its lines, terminated by a blank line
    pub fn finish(mut self) -> Vec<String> {
        self.lines.push("}".to_string());
        self.lines.push(String::new());
        self.lines
    }
}

/// Lines of an `import` stanza, terminated by a blank line
pub fn import_block(address: &str, id: &str) -> Vec<String> {
    vec![
        "import {".to_string(),
        format!("{}to = {}", INDENT, address),
        format!("{}id = {}", INDENT, quote(id)),
        "}".to_string(),
        String::new(),
    ]
}
