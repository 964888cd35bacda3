use bfi::cli_util::print_interp_error;
use bfi::{Capacity, Interpreter, Sanitizer, DEFAULT_MAX_PROGRAM_LEN, DEFAULT_TAPE_SIZE};
use clap::Parser;
use std::env;
use std::fs;
use std::io::{self, Read, Write};

fn usage_and_exit(program: &str, code: i32) -> ! {
    eprintln!(
        r#"Usage:
  {0} "<code>"        # Run Brainfuck code (args are concatenated)
  {0} --file <PATH>   # Run Brainfuck code loaded from file
  {0} < program.bf    # Read code from stdin when no code is given

Options:
  --file, -f <PATH>       Read Brainfuck code from PATH instead of positional "<code>"
  --tape-size <CELLS>     Number of tape cells (fallback BFI_TAPE_SIZE; default 30000)
  --max-program <N>       Sanitized program length cap (fallback BFI_MAX_PROGRAM; default 65536)
  --help, -h              Show this help

Notes:
- All bytes outside of Brainfuck's ><+-.,[] are treated as comments and dropped.
- Input (`,`) reads a single byte from stdin; on EOF the current cell is set to 0.
- Output (`.`) writes raw bytes to stdout with no added framing.
- When the code itself comes from stdin, stdin is exhausted before the run,
  so every `,` sees EOF.

Examples:
- Load Brainfuck code from a file:
    {0} --file ./program.bf
- Read bytes from a file as stdin (`,` will consume file input):
    {0} ",[.,]" < input.txt
"#,
        program
    );
    let _ = io::stderr().flush();
    std::process::exit(code);
}

#[derive(Parser, Debug)]
#[command(name = "bfi", disable_help_flag = true)]
struct Cli {
    /// Read Brainfuck code from PATH instead of positional "<code>"
    #[arg(short = 'f', long = "file")]
    file: Option<String>,

    /// Number of tape cells (fallback BFI_TAPE_SIZE; default 30000)
    #[arg(long = "tape-size", value_name = "CELLS")]
    tape_size: Option<usize>,

    /// Sanitized program length cap (fallback BFI_MAX_PROGRAM; default 65536)
    #[arg(long = "max-program", value_name = "N")]
    max_program: Option<usize>,

    /// Concatenated Brainfuck code parts
    #[arg(value_name = "code", trailing_var_arg = true)]
    code: Vec<String>,

    /// Show this help
    #[arg(short = 'h', long = "help", action = clap::ArgAction::SetTrue)]
    help: bool,
}

/// Sanitize raw source from `reader` chunk by chunk, stopping at EOF or at
/// the program length cap (whichever comes first).
fn read_program_from<R: Read>(reader: &mut R, max_len: usize) -> io::Result<Vec<u8>> {
    let mut sanitizer = Sanitizer::new(max_len);
    let mut chunk = [0u8; 4096];

    loop {
        let n = reader.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        if sanitizer.push(&chunk[..n]) == Capacity::Full {
            break;
        }
    }

    Ok(sanitizer.finish())
}

fn run_with_args(program_name: &str, args: Cli) -> i32 {
    if args.help {
        usage_and_exit(program_name, 0);
    }

    let Cli {
        file,
        tape_size,
        max_program,
        code,
        ..
    } = args;

    if file.is_some() && !code.is_empty() {
        eprintln!("{program_name}: cannot use positional code together with --file");
        usage_and_exit(program_name, 2);
    }

    // Resolve limits: flags -> env -> defaults
    let tape_size = tape_size
        .or_else(|| env::var("BFI_TAPE_SIZE").ok().and_then(|s| s.parse().ok()))
        .unwrap_or(DEFAULT_TAPE_SIZE);
    let max_program = max_program
        .or_else(|| env::var("BFI_MAX_PROGRAM").ok().and_then(|s| s.parse().ok()))
        .unwrap_or(DEFAULT_MAX_PROGRAM_LEN);

    if tape_size == 0 {
        eprintln!("{program_name}: tape size must be at least 1 cell");
        usage_and_exit(program_name, 2);
    }

    let program = if let Some(path) = file {
        match fs::read(&path) {
            Ok(source) => {
                let mut sanitizer = Sanitizer::new(max_program);
                sanitizer.push(&source);
                sanitizer.finish()
            }
            Err(e) => {
                eprintln!("{program_name}: failed to read code file: {e}");
                let _ = io::stderr().flush();
                return 1;
            }
        }
    } else if !code.is_empty() {
        let mut sanitizer = Sanitizer::new(max_program);
        sanitizer.push(code.join("").as_bytes());
        sanitizer.finish()
    } else {
        match read_program_from(&mut io::stdin().lock(), max_program) {
            Ok(program) => program,
            Err(e) => {
                eprintln!("{program_name}: failed reading code from stdin: {e}");
                let _ = io::stderr().flush();
                return 1;
            }
        }
    };

    let mut interp = Interpreter::new_with_tape(program.clone(), tape_size);
    if let Err(err) = interp.run() {
        print_interp_error(Some(program_name), &program, &err);
        let _ = io::stderr().flush();
        return 1;
    }

    let _ = io::stdout().flush();
    0
}

fn main() {
    // We still pull the program name for help rendering consistency
    let program_name = env::args().next().unwrap_or_else(|| String::from("bfi"));

    let cli = Cli::parse();
    let code = run_with_args(&program_name, cli);

    std::process::exit(code);
}
