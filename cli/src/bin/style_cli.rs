use clap::{Parser, Subcommand};
use cli::{JobBatch, JobError, StyleJob};
use color_eyre::eyre::Result;
use image::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};
use style_codec::{
    image_to_tensor, resize_fill, tensor_to_image, Normalization, PassthroughExecutor,
    TensorExecutor,
};
use tracing::{info, warn};
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode an image into a raw float32 model-input tensor file
    Encode {
        /// Path to the input image
        #[arg(short, long)]
        input: PathBuf,
        /// Path for the raw tensor output (native-byte-order f32)
        #[arg(short, long)]
        output: PathBuf,
        /// Model input width in pixels
        #[arg(long)]
        width: u32,
        /// Model input height in pixels
        #[arg(long)]
        height: u32,
        /// Normalization mean, subtracted from each channel
        #[arg(long, default_value_t = 0.0)]
        mean: f32,
        /// Normalization std, dividing each channel
        #[arg(long, default_value_t = 255.0)]
        std: f32,
    },
    /// Decode a raw float32 model-output tensor file into an image
    Decode {
        /// Path to the raw tensor file (native-byte-order f32, values in [0,1])
        #[arg(short, long)]
        input: PathBuf,
        /// Path for the decoded image
        #[arg(short, long)]
        output: PathBuf,
        /// Tensor width in pixels
        #[arg(long)]
        width: u32,
        /// Tensor height in pixels
        #[arg(long)]
        height: u32,
    },
    /// Stretch an image to exact dimensions (aspect ratio is not preserved)
    Resize {
        /// Path to the input image
        #[arg(short, long)]
        input: PathBuf,
        /// Path for the resized image
        #[arg(short, long)]
        output: PathBuf,
        /// Target width in pixels
        #[arg(long)]
        width: u32,
        /// Target height in pixels
        #[arg(long)]
        height: u32,
    },
    /// Run a batch of encode/execute/decode round trips from a configuration file
    Process {
        /// Path to the JSON or TOML configuration file
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Write an example batch configuration to get started from
    Skeleton {
        /// Destination path; the extension picks the format (.json or .toml)
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Encode {
            input,
            output,
            width,
            height,
            mean,
            std,
        } => {
            encode_image(
                input,
                output,
                *width,
                *height,
                Normalization {
                    mean: *mean,
                    std: *std,
                },
            )?;
        }
        Commands::Decode {
            input,
            output,
            width,
            height,
        } => {
            decode_tensor(input, output, *width, *height)?;
        }
        Commands::Resize {
            input,
            output,
            width,
            height,
        } => {
            resize_image(input, output, *width, *height)?;
        }
        Commands::Process { config } => {
            process_batch(config)?;
        }
        Commands::Skeleton { output } => {
            write_skeleton(output)?;
        }
    }

    Ok(())
}

fn encode_image(
    input: &Path,
    output: &Path,
    width: u32,
    height: u32,
    norm: Normalization,
) -> Result<()> {
    let image = image::open(input)?;
    let (src_width, src_height) = image.dimensions();
    info!("Loaded {:?} at {}x{}", input, src_width, src_height);

    let tensor = image_to_tensor(&image, width, height, norm)?;
    let bytes = tensor.to_ne_bytes();
    fs::write(output, &bytes)?;

    info!(
        "Wrote {} floats ({} bytes) to {:?}",
        tensor.as_slice().len(),
        bytes.len(),
        output
    );
    Ok(())
}

fn decode_tensor(input: &Path, output: &Path, width: u32, height: u32) -> Result<()> {
    let bytes = fs::read(input)?;
    if bytes.len() % 4 != 0 {
        warn!(
            "{:?} holds {} bytes, not a whole number of f32 values; trailing bytes ignored",
            input,
            bytes.len()
        );
    }

    let floats: Vec<f32> = bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    let image = tensor_to_image(&floats, width, height)?;
    image.save(output)?;

    info!("Decoded {:?} into a {}x{} image at {:?}", input, width, height, output);
    Ok(())
}

fn resize_image(input: &Path, output: &Path, width: u32, height: u32) -> Result<()> {
    let image = image::open(input)?;
    let resized = resize_fill(&image, width, height)?;
    resized.save(output)?;

    info!("Resized {:?} to {}x{} at {:?}", input, width, height, output);
    Ok(())
}

fn process_batch(config_path: &Path) -> Result<()> {
    let batch = JobBatch::from_file(config_path)?;
    info!("Loaded batch of {} jobs from {:?}", batch.jobs.len(), config_path);

    fs::create_dir_all(&batch.output_dir)?;

    // A real model executor slots in here; the passthrough round trip shows
    // exactly what a model would receive and lets the layout be checked
    let executor = PassthroughExecutor;

    for job in &batch.jobs {
        let output_filename = format!("{}/{}.png", batch.output_dir, job.name);
        info!("Processing job '{}' -> {}", job.name, output_filename);

        let norm = job.normalization();
        if norm != Normalization::default() {
            warn!(
                "Job '{}' normalizes with mean {} / std {}, but decoding assumes [0,1] output",
                job.name, norm.mean, norm.std
            );
        }

        let image = image::open(&job.input)?;
        let tensor = image_to_tensor(&image, job.width, job.height, norm)?;
        let stylized = executor.execute(&tensor)?;
        let result = tensor_to_image(stylized.as_slice(), job.width, job.height)?;
        result.save(&output_filename)?;
    }

    info!("✅ Batch processing completed!");
    Ok(())
}

fn write_skeleton(output: &Path) -> Result<()> {
    let batch = JobBatch {
        output_dir: "stylized".to_string(),
        jobs: vec![StyleJob {
            name: "sample".to_string(),
            input: "photo.jpg".to_string(),
            width: 384,
            height: 384,
            mean: None,
            std: None,
        }],
    };

    match output.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => batch.to_toml_file(output)?,
        Some("json") => batch.to_json_file(output)?,
        _ => return Err(JobError::UnsupportedFileFormat.into()),
    }

    info!("Wrote skeleton configuration to {:?}", output);
    Ok(())
}
