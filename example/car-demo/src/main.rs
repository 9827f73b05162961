mod car;

use anyhow::bail;
use clap::{Parser, ValueEnum};
use kiln::ast::{AccessLevel, Marker, TreeMaker};
use kiln::pretty::PrettyPrintExt;
use kiln::process::{Driver, ProcessingConfig};
use kiln::rewrite::Round;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "car-demo", about = "Augment the Car class and print the result")]
struct Args {
    /// Do not mark Car with @Getter
    #[arg(long)]
    no_getter: bool,

    /// Mark Car with @Setter
    #[arg(long)]
    setter: bool,

    /// Access level of the generated no-argument constructor
    #[arg(long, value_enum, default_value_t = Access::Private)]
    access: Access,

    /// Do not mark Car with @NoArgsConstructor
    #[arg(long)]
    no_constructor: bool,

    /// Skip the per-member notes
    #[arg(long)]
    quiet: bool,

    /// Print the source before augmentation as well
    #[arg(long)]
    show_before: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Access {
    Public,
    Protected,
    Package,
    Private,
}

impl From<Access> for AccessLevel {
    fn from(access: Access) -> Self {
        match access {
            Access::Public => AccessLevel::Public,
            Access::Protected => AccessLevel::Protected,
            Access::Package => AccessLevel::PackagePrivate,
            Access::Private => AccessLevel::Private,
        }
    }
}

impl Args {
    fn markers(&self) -> Vec<Marker> {
        let mut markers = Vec::new();
        if !self.no_getter {
            markers.push(Marker::Getter);
        }
        if self.setter {
            markers.push(Marker::Setter);
        }
        if !self.no_constructor {
            markers.push(Marker::NoArgsConstructor {
                access: self.access.into(),
            });
        }
        markers
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let maker = TreeMaker::new();
    let unit = car::car_unit(&maker, args.markers());
    if args.show_before {
        println!("// before");
        print!("{}", unit.sprint(maker.names()));
        println!("// after");
    }

    let mut round = Round::new(maker);
    let id = round.add_unit(unit);
    let config = ProcessingConfig::new().with_member_notes(!args.quiet);
    let report = Driver::new(config).run(&round);
    tracing::debug!(claimed = ?report.claimed, "round finished");

    for diagnostic in &report.diagnostics {
        eprintln!("{diagnostic}");
    }
    if report.errors().next().is_some() {
        bail!("augmentation reported errors");
    }

    let unit = round.unit(id)?;
    print!("{}", unit.sprint(round.maker().names()));
    Ok(())
}
