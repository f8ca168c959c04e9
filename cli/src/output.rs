// Copyright 2025 RISC Zero, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Rendering of computed output roots to stdout.

use std::io::Write;

use anyhow::Result;
use output_root_core::{to_hex, Field, OutputRootProof, OutputRootReport, Preset};
use serde::Serialize;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Aligned `Label: 0x...` lines
    Text,
    /// One JSON document per invocation
    Json,
}

#[derive(Serialize)]
struct PresetOutput<'a> {
    name: &'a str,
    description: &'a str,
    report: &'a OutputRootReport,
}

#[derive(Serialize)]
struct DecodeOutput<'a> {
    proof: &'a OutputRootProof,
    is_v0: bool,
    report: &'a OutputRootReport,
}

pub fn write_report<W: Write>(w: &mut W, format: Format, report: &OutputRootReport) -> Result<()> {
    match format {
        Format::Text => writeln!(w, "{report}")?,
        Format::Json => writeln!(w, "{}", serde_json::to_string_pretty(report)?)?,
    }
    Ok(())
}

pub fn write_presets<W: Write>(
    w: &mut W,
    format: Format,
    results: &[(&Preset, OutputRootReport)],
) -> Result<()> {
    match format {
        Format::Text => {
            for (i, (preset, report)) in results.iter().enumerate() {
                if i > 0 {
                    writeln!(w)?;
                }
                writeln!(w, "# {}: {}", preset.name, preset.description)?;
                writeln!(w, "{report}")?;
            }
        }
        Format::Json => {
            let outputs: Vec<PresetOutput> = results
                .iter()
                .map(|(preset, report)| PresetOutput {
                    name: preset.name,
                    description: preset.description,
                    report,
                })
                .collect();
            writeln!(w, "{}", serde_json::to_string_pretty(&outputs)?)?;
        }
    }
    Ok(())
}

pub fn write_decoded<W: Write>(w: &mut W, format: Format, proof: &OutputRootProof) -> Result<()> {
    let report = proof.report();
    match format {
        Format::Text => {
            for field in Field::ALL {
                let label = format!("{field}:");
                writeln!(w, "{label:<25} {}", to_hex(proof.word(field)))?;
            }
            if !proof.is_v0() {
                writeln!(w, "# warning: version is not 0")?;
            }
            writeln!(w)?;
            writeln!(w, "{report}")?;
        }
        Format::Json => {
            let output = DecodeOutput {
                proof,
                is_v0: proof.is_v0(),
                report: &report,
            };
            writeln!(w, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }
    Ok(())
}
