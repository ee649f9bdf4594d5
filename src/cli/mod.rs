//! Command-line front end for the calculators.
//!
//! Argument types are clap derive structs; [`run`] executes a parsed
//! [`Cli`] and returns the report to print.

mod report;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cartax::{CarTaxCalculator, CarTaxInput, TcoInput, VehicleType};
use crate::core::{
    FiscalError, FiscalRules, HolidayCalendar, working_days, yearly_working_days,
};
use crate::efactura::{CompanySize, InvoiceRef, calculate_deadline, calculate_penalty, check_invoices};
use crate::flight::{FlightClaim, calculate_compensation, route_distance};
use crate::medical::{MedicalCode, MonthlySalary, calculate_indemnity};
use crate::pfa::{calculate_real, compare};
use crate::salary::{SalaryDirection, calculate_salary};

pub use report::Report;

/// Romanian fiscal calculators.
#[derive(Parser, Debug)]
#[command(name = "impozit", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// TOML rates file overriding the built-in rates.
    #[arg(long, global = true)]
    pub rules: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Reference date for deadlines and vehicle age (defaults to the system date).
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a salary between gross and net.
    Salary(SalaryArgs),

    /// PFA taxes under the real system, optionally compared with an income norm.
    Pfa(PfaArgs),

    /// Medical-leave indemnity.
    Medical(MedicalArgs),

    /// Annual car tax.
    #[command(name = "car-tax")]
    CarTax(CarTaxArgs),

    /// e-Factura deadlines and fines.
    #[command(subcommand)]
    Efactura(EfacturaCommand),

    /// EU261 flight compensation.
    Flight(FlightArgs),

    /// Working days of a month or a year.
    #[command(name = "working-days")]
    WorkingDays(WorkingDaysArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct SalaryArgs {
    /// Gross monthly salary in RON.
    #[arg(long)]
    pub gross: Option<Decimal>,

    /// Desired net monthly salary in RON.
    #[arg(long)]
    pub net: Option<Decimal>,
}

#[derive(Args, Debug)]
pub struct PfaArgs {
    /// Annual revenue in RON.
    #[arg(long)]
    pub revenue: Decimal,

    /// Annual deductible expenses in RON.
    #[arg(long, default_value = "0")]
    pub expenses: Decimal,

    /// Annual income norm in RON; enables the comparison.
    #[arg(long)]
    pub norm: Option<Decimal>,
}

#[derive(Args, Debug)]
pub struct MedicalArgs {
    /// Certificate code (01, 05, 06, 08, 09, 15).
    #[arg(long, default_value = "01")]
    pub code: MedicalCode,

    /// Calendar days of leave.
    #[arg(long)]
    pub days: u32,

    /// Gross salaries of the reference months, comma separated.
    #[arg(long, value_delimiter = ',', required = true)]
    pub salaries: Vec<Decimal>,

    /// Days worked in each reference month, comma separated, in the order of `--salaries`.
    #[arg(long = "days-worked", value_delimiter = ',')]
    pub days_worked: Vec<u32>,
}

#[derive(Args, Debug)]
pub struct CarTaxArgs {
    /// Engine capacity in cm³.
    #[arg(long)]
    pub cc: u32,

    /// Vehicle type (autoturism, suv, autoutilitar, motocicletă, atv, remorcă, electric, hibrid).
    #[arg(long = "type", default_value = "autoturism")]
    pub vehicle_type: VehicleType,

    #[arg(long, default_value = "București")]
    pub location: String,

    /// Year of first registration.
    #[arg(long)]
    pub year: Option<i32>,

    /// Vehicle owned by a company.
    #[arg(long)]
    pub company: bool,

    /// Compare the tax across locality classes instead.
    #[arg(long, conflicts_with = "tco")]
    pub compare: bool,

    /// Estimate the yearly cost of ownership instead.
    #[arg(long)]
    pub tco: bool,

    /// Kilometres per year, for --tco.
    #[arg(long, default_value = "15000")]
    pub km: Decimal,

    /// Fuel price in RON per litre, for --tco.
    #[arg(long, default_value = "7")]
    pub fuel_price: Decimal,

    /// Consumption in litres per 100 km, for --tco.
    #[arg(long, default_value = "8")]
    pub consumption: Decimal,
}

#[derive(Subcommand, Debug)]
pub enum EfacturaCommand {
    /// Transmission deadline of one invoice.
    Deadline {
        /// Invoice date (YYYY-MM-DD).
        #[arg(long)]
        date: NaiveDate,
    },
    /// Deadlines of several invoices.
    Check {
        /// Invoice dates (YYYY-MM-DD), comma separated.
        #[arg(long, value_delimiter = ',', required = true)]
        dates: Vec<NaiveDate>,
    },
    /// Fines for invoices not transmitted.
    Penalty {
        /// Company size (micro, medium, large).
        #[arg(long, default_value = "micro")]
        size: CompanySize,

        #[arg(long, default_value_t = 1)]
        count: u32,
    },
}

#[derive(Args, Debug)]
pub struct FlightArgs {
    /// Flight distance in km.
    #[arg(long, required_unless_present = "from")]
    pub distance: Option<u32>,

    /// Departure city, for a known route.
    #[arg(long, requires = "to", conflicts_with = "distance")]
    pub from: Option<String>,

    /// Arrival city, for a known route.
    #[arg(long, requires = "from")]
    pub to: Option<String>,

    /// Arrival delay in hours.
    #[arg(long, default_value = "0")]
    pub delay: Decimal,

    #[arg(long)]
    pub cancelled: bool,

    #[arg(long)]
    pub denied_boarding: bool,

    /// The flight did not depart from the EU.
    #[arg(long)]
    pub non_eu_departure: bool,

    /// The airline is not an EU carrier.
    #[arg(long)]
    pub non_eu_carrier: bool,

    /// Flight date (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub struct WorkingDaysArgs {
    /// Year; defaults to the rates-table year.
    #[arg(long)]
    pub year: Option<i32>,

    /// Month (1-12); the whole year when omitted.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,
}

/// Everything a command needs besides its own arguments.
pub struct Context {
    pub rules: FiscalRules,
    pub calendar: HolidayCalendar,
    pub today: NaiveDate,
    pub json: bool,
}

impl Context {
    /// Load the rates file (if any) and fix the reference date.
    pub fn from_cli(cli: &Cli) -> Result<Self, FiscalError> {
        let rules = match &cli.rules {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading rates file");
                FiscalRules::from_toml_file(path)?
            }
            None => FiscalRules::default(),
        };
        let today = cli
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        Ok(Self {
            calendar: rules.calendar(),
            rules,
            today,
            json: cli.json,
        })
    }

    fn emit<T: Serialize + Report>(&self, value: &T) -> Result<String, FiscalError> {
        if self.json {
            serde_json::to_string_pretty(value).map_err(|e| FiscalError::Output(e.to_string()))
        } else {
            Ok(value.render())
        }
    }
}

/// Run a parsed command line and return the text to print.
pub fn run(cli: &Cli) -> Result<String, FiscalError> {
    let ctx = Context::from_cli(cli)?;
    tracing::debug!(year = ctx.rules.year, today = %ctx.today, "context ready");
    execute(&cli.command, &ctx)
}

/// Execute one command against a prepared context.
pub fn execute(command: &Commands, ctx: &Context) -> Result<String, FiscalError> {
    let rules = &ctx.rules;
    match command {
        Commands::Salary(args) => {
            let (direction, amount) = match (args.gross, args.net) {
                (Some(gross), _) => (SalaryDirection::GrossToNet, gross),
                (None, Some(net)) => (SalaryDirection::NetToGross, net),
                (None, None) => {
                    return Err(FiscalError::InvalidInput(
                        "either --gross or --net is required".into(),
                    ));
                }
            };
            ctx.emit(&calculate_salary(direction, amount, rules)?)
        }
        Commands::Pfa(args) => match args.norm {
            Some(norm) => ctx.emit(&compare(args.revenue, args.expenses, norm, rules)?),
            None => ctx.emit(&calculate_real(args.revenue, args.expenses, rules)?),
        },
        Commands::Medical(args) => {
            let salaries: Vec<MonthlySalary> = if args.days_worked.is_empty() {
                args.salaries.iter().copied().map(MonthlySalary::new).collect()
            } else if args.days_worked.len() == args.salaries.len() {
                args.salaries
                    .iter()
                    .zip(&args.days_worked)
                    .map(|(&gross, &days)| MonthlySalary::with_days(gross, days))
                    .collect()
            } else {
                return Err(FiscalError::InvalidInput(format!(
                    "{} salaries but {} worked-day counts",
                    args.salaries.len(),
                    args.days_worked.len()
                )));
            };
            ctx.emit(&calculate_indemnity(args.code, args.days, &salaries, rules)?)
        }
        Commands::CarTax(args) => {
            let calc = CarTaxCalculator::new(rules);
            if args.compare {
                return ctx.emit(&calc.compare_locations(args.cc, args.vehicle_type, ctx.today)?);
            }
            let mut input = CarTaxInput::new(args.cc)
                .vehicle_type(args.vehicle_type)
                .location(args.location.as_str())
                .company(args.company);
            if let Some(year) = args.year {
                input = input.registration_year(year);
            }
            if args.tco {
                let tco = TcoInput::new(input)
                    .annual_km(args.km)
                    .fuel_price(args.fuel_price)
                    .consumption(args.consumption);
                ctx.emit(&calc.estimate_tco(&tco, ctx.today)?)
            } else {
                ctx.emit(&calc.calculate(&input, ctx.today)?)
            }
        }
        Commands::Efactura(EfacturaCommand::Deadline { date }) => {
            ctx.emit(&calculate_deadline(*date, ctx.today, rules, &ctx.calendar))
        }
        Commands::Efactura(EfacturaCommand::Check { dates }) => {
            let invoices: Vec<InvoiceRef> = dates.iter().copied().map(InvoiceRef::new).collect();
            ctx.emit(&check_invoices(&invoices, ctx.today, rules, &ctx.calendar))
        }
        Commands::Efactura(EfacturaCommand::Penalty { size, count }) => {
            ctx.emit(&calculate_penalty(*size, *count, rules)?)
        }
        Commands::Flight(args) => {
            let distance = match (args.distance, &args.from, &args.to) {
                (Some(km), _, _) => km,
                (None, Some(from), Some(to)) => route_distance(from, to).ok_or_else(|| {
                    FiscalError::InvalidInput(format!(
                        "unknown route {from} - {to}, pass --distance instead"
                    ))
                })?,
                _ => {
                    return Err(FiscalError::InvalidInput(
                        "either --distance or --from/--to is required".into(),
                    ));
                }
            };
            let claim = FlightClaim::new(distance, args.date.unwrap_or(ctx.today))
                .delay_hours(args.delay)
                .cancelled(args.cancelled)
                .denied_boarding(args.denied_boarding)
                .eu_departure(!args.non_eu_departure)
                .eu_carrier(!args.non_eu_carrier);
            ctx.emit(&calculate_compensation(&claim, ctx.today, rules)?)
        }
        Commands::WorkingDays(args) => {
            let year = args.year.unwrap_or(rules.year);
            match args.month {
                Some(month) => ctx.emit(&working_days(year, month, &ctx.calendar)?),
                None => ctx.emit(&yearly_working_days(year, &ctx.calendar)?),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(json: bool) -> Context {
        let rules = FiscalRules::default();
        Context {
            calendar: rules.calendar(),
            rules,
            today: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            json,
        }
    }

    fn run_args(args: &[&str], json: bool) -> Result<String, FiscalError> {
        let cli = Cli::try_parse_from(args).unwrap();
        execute(&cli.command, &context(json))
    }

    #[test]
    fn parse_salary_gross() {
        let cli = Cli::try_parse_from(["impozit", "salary", "--gross", "5000"]).unwrap();
        match cli.command {
            Commands::Salary(args) => {
                assert_eq!(args.gross, Some(Decimal::from(5000)));
                assert!(args.net.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn salary_needs_exactly_one_amount() {
        assert!(Cli::try_parse_from(["impozit", "salary"]).is_err());
        assert!(
            Cli::try_parse_from(["impozit", "salary", "--gross", "1", "--net", "1"]).is_err()
        );
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "impozit",
            "working-days",
            "--month",
            "1",
            "--json",
            "-vv",
            "--today",
            "2026-01-15",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2026, 1, 15));
    }

    #[test]
    fn car_tax_type_parses_romanian_code() {
        let cli =
            Cli::try_parse_from(["impozit", "car-tax", "--cc", "1800", "--type", "motocicleta"])
                .unwrap();
        match cli.command {
            Commands::CarTax(args) => assert_eq!(args.vehicle_type, VehicleType::Motorcycle),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn salary_text_report() {
        let out = run_args(&["impozit", "salary", "--gross", "5000"], false).unwrap();
        assert!(out.contains("2976.00 RON"));
    }

    #[test]
    fn working_days_json() {
        let out = run_args(&["impozit", "working-days", "--month", "1"], true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["working_days"], 18);
    }

    #[test]
    fn efactura_penalty_text() {
        let out = run_args(
            &["impozit", "efactura", "penalty", "--size", "large", "--count", "4"],
            false,
        )
        .unwrap();
        assert!(out.contains("40000 - 100000 RON"));
        assert!(out.contains("Warning"));
    }

    #[test]
    fn flight_by_known_route() {
        let out = run_args(
            &[
                "impozit", "flight", "--from", "Bucuresti", "--to", "Londra", "--delay", "5",
                "--date", "2026-09-01",
            ],
            true,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["compensation"], "400");
    }

    #[test]
    fn unknown_route_is_an_error() {
        let err = run_args(
            &["impozit", "flight", "--from", "Iasi", "--to", "Lima", "--cancelled"],
            false,
        )
        .unwrap_err();
        assert!(matches!(err, FiscalError::InvalidInput(_)));
    }

    #[test]
    fn medical_with_worked_days() {
        let out = run_args(
            &[
                "impozit",
                "medical",
                "--days",
                "10",
                "--salaries",
                "6000,6000,6000,6000,6000,6000",
                "--days-worked",
                "20,20,20,20,20,20",
            ],
            true,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let daily: Decimal = value["daily_average"].as_str().unwrap().parse().unwrap();
        assert_eq!(daily, Decimal::from(300));
    }

    #[test]
    fn medical_worked_days_must_match_salaries() {
        let err = run_args(
            &[
                "impozit",
                "medical",
                "--days",
                "10",
                "--salaries",
                "6000,6000,6000,6000,6000,6000",
                "--days-worked",
                "20,20",
            ],
            false,
        )
        .unwrap_err();
        assert!(matches!(err, FiscalError::InvalidInput(_)));
    }

    #[test]
    fn out_of_range_inputs_are_errors() {
        let err = run_args(
            &["impozit", "salary", "--gross", "10000000000000000000000000000"],
            false,
        )
        .unwrap_err();
        assert!(matches!(err, FiscalError::InvalidInput(_)));

        let err = run_args(&["impozit", "car-tax", "--cc", "1600", "--year=-2147483648"], false)
            .unwrap_err();
        assert!(matches!(err, FiscalError::InvalidInput(_)));
    }
}
