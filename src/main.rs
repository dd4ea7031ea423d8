use anyhow::Context;
use clap::{ArgGroup, Parser, ValueEnum};
use log::info;
use overlay_gen::overlay::{output_filename, Device, LegendSet, LegendTable, Mode, Sheet};
use overlay_gen::pagesize::{self, PageSize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Generate calculator keyboard overlays", long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["cut", "print", "all"])))]
#[command(group(ArgGroup::new("device").args(["hp", "sm"])))]
struct Cli {
    /// Cut marks: overlay and key outlines
    #[arg(short, long)]
    cut: bool,

    /// Print: registration marks and legends
    #[arg(short, long)]
    print: bool,

    /// All: registration marks, legends and cut marks
    #[arg(short, long)]
    all: bool,

    /// HP Voyager calculator (the default)
    #[arg(long)]
    hp: bool,

    /// SwissMicros calculator
    #[arg(long)]
    sm: bool,

    /// Output PDF file [default: <model>-overlay-<mode>.pdf]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Labels for the first key row
    #[arg(long, value_enum, default_value_t = Legends::Scientific)]
    legends: Legends,

    /// Paper size
    #[arg(long, value_enum, default_value_t = Paper::Letter)]
    paper: Paper,

    /// Write content streams uncompressed
    #[arg(long)]
    uncompressed: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Legends {
    Scientific,
    Shift,
}

impl From<Legends> for LegendSet {
    fn from(l: Legends) -> Self {
        match l {
            Legends::Scientific => LegendSet::Scientific,
            Legends::Shift => LegendSet::Shift,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Paper {
    Letter,
    Legal,
    A4,
}

impl From<Paper> for PageSize {
    fn from(p: Paper) -> Self {
        match p {
            Paper::Letter => pagesize::LETTER,
            Paper::Legal => pagesize::LEGAL,
            Paper::A4 => pagesize::A4,
        }
    }
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.all {
            Mode::All
        } else if self.print {
            Mode::Print
        } else {
            Mode::Cut
        }
    }

    fn device(&self) -> Device {
        if self.sm {
            Device::Dm1xl
        } else {
            Device::Voyager
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mode = cli.mode();
    let device = cli.device();

    let mut sheet = Sheet::new(device, mode);
    sheet.page_size = cli.paper.into();
    sheet.legends = LegendTable::for_set(cli.legends.into());

    let path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(output_filename(device, mode)));

    let mut doc = sheet.document()?;
    doc.compress = !cli.uncompressed;

    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    doc.write(&mut out)
        .and_then(|()| out.flush().map_err(Into::into))
        .with_context(|| format!("writing {}", path.display()))?;

    info!("wrote {} overlay ({}) to {}", device.model(), mode.name(), path.display());
    Ok(())
}
