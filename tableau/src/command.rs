use crate::terminal::Stylus;
use crate::{constants::*, utils::*, writer::*};
use anyhow::Error;
use std::{fs, path::PathBuf};
use structopt::StructOpt;
use tableau_chase::{
    chase::{bounder::RoundLimit, cover::minimal_cover, decide, preprocessor::Seeder, Table},
    trace::{subscriber::JsonLogger, DEFAULT_JSON_LOG_FILE},
};
use tableau_deps::syntax::Query;

#[derive(StructOpt)]
#[structopt(
    name = "tableau",
    about = "A tool for deciding dependency entailment, lossless joins and minimal covers with the chase"
)]
#[structopt(raw(setting = "structopt::clap::AppSettings::ColoredHelp"))]
pub(super) struct Command {
    #[structopt(parse(from_os_str), help = "Path to the input document")]
    input: PathBuf,
    #[structopt(
        parse(from_os_str),
        default_value = "output.json",
        help = "Path to the output document"
    )]
    output: PathBuf,
    #[structopt(long = "no-color", help = "Disable colored output.")]
    no_color: bool,
    #[structopt(
        short = "l",
        long = "log",
        parse(from_os_str),
        help = "Path to the log file."
    )]
    log: Option<PathBuf>,
}

impl Command {
    pub fn run(self) -> Result<(), Error> {
        let stylus = stylus(!self.no_color);

        let log = self
            .log
            .as_ref()
            .map(|l| l.to_str().unwrap_or(DEFAULT_JSON_LOG_FILE).to_owned());

        if !self.no_color {
            stylus.set(STYLE_LOGO);
            println!("{}", ASCII_ART);
        }

        let run = || self.process(&stylus);

        if let Some(log) = log {
            let log = fs::File::create(log)
                .map_err(|e| Error::new(e).context("cannot create the log file"))?;
            let logger = JsonLogger::new(log);
            tracing::subscriber::with_default(logger, run)
        } else {
            run()
        }
    }

    fn process(&self, stylus: &Stylus) -> Result<(), Error> {
        let document = read_document(&self.input)?;
        print_document(&document, stylus);

        let output = &self.output;
        let bounder = RoundLimit::default();
        let mut failure = None;

        match &document.query {
            Query::MinimalCover => {
                let cover = minimal_cover(&document.relation, &bounder, |fds| {
                    if failure.is_none() {
                        failure = write_cover(output, fds).err();
                    }
                })
                .map_err(|e| Error::new(e).context("failed to compute the minimal cover"))?;
                if let Some(e) = failure {
                    return Err(e);
                }

                write_cover(output, &cover)?;
                print_cover(&cover, stylus);
            }
            query => {
                let snapshot = |round: usize, table: &Table| {
                    if failure.is_none() {
                        failure = write_snapshot(output, round, table).err();
                    }
                };
                let outcome = decide(&Seeder, &document.relation, query, &bounder, snapshot)
                    .map_err(|e| Error::new(e).context("failed to run the chase"))?;
                if let Some(e) = failure {
                    return Err(e);
                }

                write_result(output, &outcome)?;
                print_outcome(&outcome, stylus);
            }
        }

        stylus.set(STYLE_INFO);
        println!("Output written to `{}`.", output.display());
        Ok(())
    }
}
