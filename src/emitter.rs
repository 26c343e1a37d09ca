// src/emitter.rs

//! Emits colormap class declarations into an output file.
//!
//! One `DeclWriter` owns one output file for the duration of a write
//! session: open (truncate), base marker, zero or more declarations,
//! manifest, close. The manifest is only written by [`DeclWriter::finish`];
//! if a write fails mid-session the writer is dropped instead, closing
//! the file without masking the original error.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::colormap::Colormap;

/// Provenance URL used when a colormap carries none.
pub const DEFAULT_SRC_URL: &str =
    "https://matplotlib.org/stable/users/explain/colors/colormaps.html";

/// Removes formatting whitespace from a generated literal unless pretty
/// output was requested.
fn strip(s: String, pretty: bool) -> String {
    if pretty {
        return s;
    }
    s.replace(&['\t', '\n', ' '][..], "")
}

/// Write session over one output file.
///
/// Dropping the writer closes the file; flush or close errors at drop
/// time are swallowed (a `BufWriter` drop never panics), so the error
/// that aborted the session is the one that propagates.
#[derive(Debug)]
pub struct DeclWriter {
    out: BufWriter<File>,
    abc: String,
    prefix: String,
    manifest: String,
    pretty: bool,
    names: Vec<String>,
}

impl DeclWriter {
    /// Opens (creating or truncating) the output file and writes the
    /// shared base-marker declaration.
    pub fn create(
        path: &Path,
        abc: &str,
        prefix: &str,
        manifest: &str,
        pretty: bool,
    ) -> io::Result<Self> {
        let file = File::create(path)?;
        let mut writer = DeclWriter {
            out: BufWriter::new(file),
            abc: abc.to_string(),
            prefix: prefix.to_string(),
            manifest: manifest.to_string(),
            pretty,
            names: Vec::new(),
        };
        write!(
            writer.out,
            "class {}{{static reversable = true;}}",
            writer.abc
        )?;
        Ok(writer)
    }

    /// Emits one colormap declaration and records its manifest name.
    ///
    /// Every one of the colormap's entries is emitted, in index order,
    /// reduced to its three channel values.
    pub fn write_colormap(&mut self, cm: &Colormap) -> io::Result<()> {
        debug!("emitting {}{}", self.prefix, cm.name());
        self.names.push(format!("{}{}", self.prefix, cm.name()));

        write!(
            self.out,
            "\nclass {}{} extends {}{{\n",
            self.prefix,
            cm.name(),
            self.abc
        )?;
        write!(self.out, "\tstatic name = \"{}\";\n", cm.name())?;
        let url = cm.meta().url.as_deref().unwrap_or(DEFAULT_SRC_URL);
        write!(self.out, "\tstatic src = \"{}\";\n", url)?;

        let mut body = String::new();
        for i in 0..cm.len() {
            let c = cm.color_at(i);
            body.push_str(&format!("\t\t[{}, {}, {}],\n", c.r, c.g, c.b));
        }
        let literal = strip(format!("[\n{}\t];", body), self.pretty);
        write!(self.out, "\tstatic colors = {}", literal)?;
        write!(self.out, "\n}}")?;
        Ok(())
    }

    /// Writes the manifest constant, flushes, and closes the session.
    /// Returns the manifest names in emission order.
    pub fn finish(mut self) -> io::Result<Vec<String>> {
        let body = strip(
            format!("\n\t{}\n];", self.names.join(",\n\t")),
            self.pretty,
        );
        write!(self.out, "\nexport const {} = [{}", self.manifest, body)?;
        self.out.flush()?;
        Ok(self.names)
    }
}
