use anyhow::Result;
use clap::Parser;

use shared_staking_utils::address::{derive_account_address, derive_operator_address};

#[derive(Debug, Parser)]
#[command(about = "Print the account address controlling a validator operator address")]
pub struct Opts {
    /// A `kyvevaloper1...` operator address (or an account address with --to-operator).
    address: String,

    /// Derive the operator address of an account address instead.
    #[clap(long)]
    to_operator: bool,
}

pub async fn run(opts: &Opts) -> Result<()> {
    let derived = if opts.to_operator {
        derive_operator_address(&opts.address)?
    } else {
        derive_account_address(&opts.address)?
    };

    println!("{}", derived);

    Ok(())
}
