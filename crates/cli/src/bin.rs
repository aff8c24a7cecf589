//! The `simdjs` command line interface.

mod parse;

use simdjs_rt_simd::{PrototypeBuiltin, SimdType, Value};

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// Logs every builtin function call.
    ///
    /// If not set, logging is controlled by the `RUST_LOG` environment variable.
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Lists the SIMD types.
    Types,
    /// Lists the builtin functions of a SIMD type, along with their `length`.
    Ops {
        /// The name of the SIMD type, such as `Int32x4`.
        simd_type: SimdType,
    },
    /// Constructs a vector from the given lane values.
    New {
        /// The name of the SIMD type, such as `Int32x4`.
        simd_type: SimdType,
        /// The lane values.
        #[arg(allow_hyphen_values = true)]
        lanes: Vec<String>,
    },
    /// Calls a builtin function of a SIMD type.
    ///
    /// Arguments are literals such as `-1.5`, `NaN`, `true`, `"text"`, `{}`,
    /// `Int32x4(1,2,3,4)`, or `Float32Array(1,2,3,4)`. The prototype functions `toString`,
    /// `toLocaleString`, and `valueOf` take the vector as their first argument.
    Call {
        /// The name of the SIMD type, such as `Int32x4`.
        simd_type: SimdType,
        /// The name of the builtin function, such as `add`.
        operation: String,
        /// The arguments passed to the builtin function.
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
        /// Prints the contents of every typed array argument after the call.
        #[arg(long)]
        dump: bool,
    },
}

fn initialize_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("trace")
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn parse_args(args: &[String]) -> anyhow::Result<Vec<Value>> {
    args.iter().map(|arg| parse::parse_value(arg)).collect()
}

fn call(ty: SimdType, operation: &str, args: &[Value]) -> anyhow::Result<Value> {
    use anyhow::Context;

    if let Some(function) = PrototypeBuiltin::from_name(operation) {
        let undefined = Value::Undefined;
        return Ok(function.call(ty, args.first().unwrap_or(&undefined))?);
    }

    let function = ty
        .builtin(operation)
        .with_context(|| format!("{ty} does not provide {operation:?}"))?;
    Ok(function.call(args)?)
}

pub fn main() -> anyhow::Result<()> {
    use anyhow::Context;

    let arguments = <Arguments as clap::Parser>::parse();
    initialize_tracing(arguments.verbose);

    match arguments.command {
        Command::Types => {
            for ty in simdjs_rt_simd::simd_types() {
                print!(
                    "{:<10} {:>2} x {} bytes  {}",
                    ty.name(),
                    ty.lane_count(),
                    ty.bytes_per_lane(),
                    ty.kind().name()
                );
                if let Some((min, max)) = ty.int_range() {
                    print!(" in {min}..={max}");
                }
                println!();
            }
        }
        Command::Ops { simd_type } => {
            for function in simd_type.builtins() {
                println!("{}/{}", function.name(), function.length());
            }
            for function in PrototypeBuiltin::ALL {
                println!("prototype.{}/0", function.name());
            }
        }
        Command::New { simd_type, lanes } => {
            let lanes = parse_args(&lanes)?;
            let vector = simd_type
                .create(&lanes)
                .with_context(|| format!("could not construct {simd_type}"))?;
            println!("{vector}");
        }
        Command::Call {
            simd_type,
            operation,
            args,
            dump,
        } => {
            let args = parse_args(&args)?;
            let result = call(simd_type, &operation, &args)
                .with_context(|| format!("{simd_type}.{operation} failed"))?;
            println!("{result}");

            if dump {
                for (i, arg) in args.iter().enumerate() {
                    if let Value::TypedArray(array) = arg {
                        println!("\nargument {i}: {}", array.kind());
                        print!("{:X}", simdjs_rt_memory::HexDump::new(array));
                    }
                }
            }
        }
    }

    Ok(())
}
