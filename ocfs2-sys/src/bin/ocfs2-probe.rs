// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use ocfs2_sys::tools::missing_tools;
use ocfs2_sys::volume::{query_volume, space_usage};
use ocfs2_sys::{PartitionSource, SystemPartitionSource, SystemRunner};
use ocfs2_types::bytes_to_pretty;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "ocfs2-probe")]
#[command(about = "List partitions the OCFS2 console would show")]
struct Args {
    /// Also query the OCFS2 volume details of this device
    #[arg(long)]
    device: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Only list OCFS2 partitions
    #[arg(long)]
    ocfs2_only: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let runner = Arc::new(SystemRunner);
    let source = SystemPartitionSource::new(runner.clone());

    let mut partitions = source.scan().await?;
    if args.ocfs2_only {
        partitions.retain(|p| p.is_ocfs2());
    }

    let volume = match &args.device {
        Some(device) => {
            let mut info = query_volume(runner.as_ref(), device).await?;
            info.mountpoint = partitions
                .iter()
                .find(|p| &p.device == device)
                .and_then(|p| p.mountpoint.clone());
            if let Some(mountpoint) = &info.mountpoint {
                info.space = space_usage(mountpoint).ok();
            }
            Some(info)
        }
        None => None,
    };

    if args.json {
        let report = serde_json::json!({
            "partitions": partitions,
            "volume": volume,
            "missing_tools": missing_tools(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{:<20} {:<8} {:<16} {:>12}  MOUNTPOINT", "DEVICE", "FSTYPE", "LABEL", "SIZE");
    for partition in &partitions {
        println!(
            "{:<20} {:<8} {:<16} {:>12}  {}",
            partition.device,
            partition.fs_type.as_deref().unwrap_or("-"),
            partition.label.as_deref().unwrap_or("-"),
            bytes_to_pretty(&partition.size, false),
            partition.mountpoint.as_deref().unwrap_or("-"),
        );
    }

    if let Some(info) = volume {
        println!();
        println!("device={}", info.device);
        println!("label={}", info.label);
        println!("uuid={}", info.uuid);
        println!("block_size={}", info.block_size.map(|v| v.to_string()).unwrap_or_default());
        println!("cluster_size={}", info.cluster_size.map(|v| v.to_string()).unwrap_or_default());
        println!("node_slots={}", info.node_slots.map(|v| v.to_string()).unwrap_or_default());
        if let Some(space) = info.space {
            println!(
                "space total={} used={} free={} ({}% used)",
                space.total,
                space.used,
                space.free,
                space.percent_used()
            );
        }
    }

    for tool in missing_tools() {
        eprintln!("warning: {} not found (install {})", tool.command, tool.package_hint);
    }

    Ok(())
}
