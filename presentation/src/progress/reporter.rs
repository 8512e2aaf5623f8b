//! Progress reporting for SCAMPER execution

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use scamper_application::ProgressNotifier;
use scamper_domain::Technique;
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress during a SCAMPER run with progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    fan_out_bar: Mutex<Option<ProgressBar>>,
    summary_spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            fan_out_bar: Mutex::new(None),
            summary_spinner: Mutex::new(None),
        }
    }

    fn fan_out_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_fan_out_start(&self, total_techniques: usize) {
        let pb = self.multi.add(ProgressBar::new(total_techniques as u64));
        pb.set_style(Self::fan_out_style());
        pb.set_prefix("Técnicas SCAMPER");
        pb.set_message("Iniciando...");

        if let Ok(mut bar) = self.fan_out_bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_technique_complete(&self, technique: Technique, success: bool) {
        if let Ok(bar) = self.fan_out_bar.lock() {
            if let Some(pb) = bar.as_ref() {
                let status = if success {
                    format!("{} {}", "v".green(), technique)
                } else {
                    format!("{} {}", "x".red(), technique)
                };
                pb.set_message(status);
                pb.inc(1);
            }
        }
    }

    fn on_summary_start(&self) {
        if let Ok(mut bar) = self.fan_out_bar.lock() {
            if let Some(pb) = bar.take() {
                pb.finish_with_message(format!("{}", "completado".green()));
            }
        }

        let spinner = self.multi.add(ProgressBar::new_spinner());
        spinner.set_style(Self::spinner_style());
        spinner.set_prefix("Resumen ejecutivo");
        spinner.set_message("generando...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.summary_spinner.lock() {
            *slot = Some(spinner);
        }
    }

    fn on_summary_complete(&self, synthesized: bool) {
        if let Ok(mut slot) = self.summary_spinner.lock() {
            if let Some(spinner) = slot.take() {
                let message = if synthesized {
                    "listo".green()
                } else {
                    "plantilla de respaldo".yellow()
                };
                spinner.finish_with_message(format!("{}", message));
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_fan_out_start(&self, total_techniques: usize) {
        println!(
            "{} {} ({} técnicas)",
            "->".cyan(),
            "Aplicando técnicas SCAMPER".bold(),
            total_techniques
        );
    }

    fn on_technique_complete(&self, technique: Technique, success: bool) {
        if success {
            println!("  {} {}", "v".green(), technique.display_name());
        } else {
            println!("  {} {} (error)", "x".red(), technique.display_name());
        }
    }

    fn on_summary_start(&self) {
        println!("{} {}", "->".cyan(), "Generando resumen ejecutivo".bold());
    }

    fn on_summary_complete(&self, _synthesized: bool) {
        println!();
    }
}
