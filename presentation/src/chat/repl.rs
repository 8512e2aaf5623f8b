//! REPL (Read-Eval-Print Loop) for interactive SCAMPER sessions

use crate::ConsoleFormatter;
use crate::ProgressReporter;
use crate::input::cli_input;
use colored::Colorize;
use scamper_application::{RunScamperUseCase, TextGenerator};
use scamper_domain::{OutputFormat, ProblemInput};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;

const HELP: &str = "\
Comandos:
  /help, /h, /?    - Mostrar esta ayuda
  /status          - Ver el estado de los agentes
  /quit, /exit, /q - Salir del chat
";

/// What the loop should do after reading a line
enum Step {
    Continue,
    Exit,
}

/// Interactive chat REPL
pub struct ChatRepl<G: TextGenerator + 'static> {
    use_case: Arc<RunScamperUseCase<G>>,
    format: OutputFormat,
    show_progress: bool,
}

impl<G: TextGenerator + 'static> ChatRepl<G> {
    /// Create a new ChatRepl
    pub fn new(use_case: Arc<RunScamperUseCase<G>>) -> Self {
        Self {
            use_case,
            format: OutputFormat::Full,
            show_progress: true,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Set the report format printed after each analysis
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("scamper").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline("Problema> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        println!("{}", "Por favor, describe un problema válido.".yellow());
                        continue;
                    }

                    if line.starts_with('/') {
                        if let Step::Exit = self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    let Some(input) = Self::read_problem(&mut rl, line)? else {
                        continue;
                    };

                    self.process_problem(&input).await;

                    if !Self::ask_continue(&mut rl)? {
                        println!("¡Gracias por usar SCAMPER! ¡Mucho éxito con tus ideas!");
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("¡Hasta luego!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          SCAMPER - Modo conversación         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("SCAMPER genera ideas a través de 7 enfoques:");
        println!("  • SUSTITUIR: ¿Qué se puede reemplazar?");
        println!("  • COMBINAR: ¿Qué se puede fusionar?");
        println!("  • ADAPTAR: ¿Qué se puede adaptar de otros contextos?");
        println!("  • MODIFICAR: ¿Qué se puede amplificar o reducir?");
        println!("  • OTROS USOS: ¿Para qué más se puede usar?");
        println!("  • ELIMINAR: ¿Qué se puede simplificar?");
        println!("  • INVERTIR: ¿Qué se puede reorganizar?");
        println!();
        println!("Modo: {}", self.use_case.config().execution_mode.display_name());
        println!();
        print!("{}", HELP);
        println!();
    }

    /// Handle slash commands.
    fn handle_command(&self, cmd: &str) -> Step {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("¡Hasta luego!");
                Step::Exit
            }
            "/help" | "/h" | "/?" => {
                println!();
                print!("{}", HELP);
                println!();
                Step::Continue
            }
            "/status" => {
                println!("{}", ConsoleFormatter::format_status(&self.use_case.status()));
                Step::Continue
            }
            _ => {
                println!("{}", unknown_command(cmd));
                Step::Continue
            }
        }
    }

    /// Validate the problem and ask for optional context.
    fn read_problem(rl: &mut DefaultEditor, problem: &str) -> RlResult<Option<ProblemInput>> {
        if let Err(e) = cli_input(problem, None) {
            println!("{}", e.to_string().yellow());
            return Ok(None);
        }

        println!("Contexto adicional (opcional): industria, público objetivo, limitaciones...");
        let context = match rl.readline("Contexto> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => return Ok(None),
            Err(ReadlineError::Eof) => String::new(),
            Err(err) => return Err(err),
        };
        let context = Some(context.trim()).filter(|c| !c.is_empty());

        match cli_input(problem, context) {
            Ok(input) => Ok(Some(input)),
            Err(e) => {
                println!("{}", e.to_string().yellow());
                Ok(None)
            }
        }
    }

    async fn process_problem(&self, input: &ProblemInput) {
        println!();

        let response = if self.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.process_with_progress(input, &progress).await
        } else {
            self.use_case.process(input).await
        };

        println!("{}", ConsoleFormatter::render(&response, self.format));
        println!();
    }

    fn ask_continue(rl: &mut DefaultEditor) -> RlResult<bool> {
        loop {
            let answer = match rl.readline("¿Quieres analizar otro problema? (s/n): ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(false),
                Err(err) => return Err(err),
            };

            match parse_yes_no(&answer) {
                Some(answer) => return Ok(answer),
                None => println!("Por favor, responde 's' para sí o 'n' para no."),
            }
        }
    }
}

fn unknown_command(cmd: &str) -> String {
    format!(
        "Comando desconocido: {}\nEscribe /help para ver los comandos disponibles",
        cmd
    )
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "s" | "sí" | "si" | "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("S"), Some(true));
        assert_eq!(parse_yes_no(" sí "), Some(true));
        assert_eq!(parse_yes_no("yes"), Some(true));
        assert_eq!(parse_yes_no("No"), Some(false));
        assert_eq!(parse_yes_no("quizás"), None);
    }

    #[test]
    fn test_command_help_is_spanish() {
        assert!(HELP.starts_with("Comandos:"));
        assert!(HELP.contains("/status          - Ver el estado de los agentes"));
        assert!(!HELP.contains("Show"));

        let unknown = unknown_command("/foo");
        assert!(unknown.starts_with("Comando desconocido: /foo"));
        assert!(unknown.contains("/help"));
    }
}
