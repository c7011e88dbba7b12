use clap::Parser;
use log::{error, info};
use std::path::Path;

use imds::config::Args;
use imds::types::IndexOptions;
use imds::{casia2, coverage, defacto, imd2020, loader, DatasetIndex, Result};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if !args.any_dataset_selected() {
        error!("At least one dataset directory must be specified.");
        std::process::exit(2);
    }

    let opts = IndexOptions {
        shuffle: !args.no_shuffle,
        seed: args.seed,
        split: args.split,
        download: false,
    };

    if let Some(dir) = &args.splicing_data_dir {
        report("splicing", defacto::splicing(dir, &opts), &args);
    }
    if let Some(dir) = &args.copy_move_data_dir {
        report("copy-move", defacto::copy_move(dir, &opts), &args);
    }
    if let Some(dir) = &args.inpainting_data_dir {
        report("inpainting", defacto::inpainting(dir, &opts), &args);
    }
    if let Some(dir) = &args.casia2_data_dir {
        report("casia2", casia2::build(dir, &opts), &args);
    }
    if let Some(dir) = &args.coverage_data_dir {
        report("coverage", coverage::build(dir, args.mask_type, &opts), &args);
    }
    if let Some(dir) = &args.imd2020_data_dir {
        report("imd2020", imd2020::build(dir, &opts), &args);
    }
}

/// Print one sample shape and the sample count for an indexed dataset.
fn report(name: &str, index: Result<DatasetIndex>, args: &Args) {
    let index = match index {
        Ok(index) => index,
        Err(e) => {
            error!("Failed to index {}: {}", name, e);
            return;
        }
    };

    match index.samples().first() {
        Some(sample) => {
            describe_image(name, &sample.image, args);
            if let Some(mask) = &sample.mask {
                describe_mask(name, mask, args);
            }
        }
        None => info!("{}: dataset is empty", name),
    }
    info!("{}: number of samples: {}", name, index.len());
}

fn describe_image(name: &str, path: &Path, args: &Args) {
    match loader::load(path, args.crop_size, (0.0, 1.0)) {
        Ok(tensor) => {
            let (c, h, w) = tensor.shape();
            info!("{}: sample image shape: {}x{}x{}", name, c, h, w);
        }
        Err(e) => error!("{}: failed to load {}: {}", name, path.display(), e),
    }
}

fn describe_mask(name: &str, path: &Path, args: &Args) {
    match loader::load_mask(path, args.crop_size) {
        Ok(tensor) => {
            let (c, h, w) = tensor.shape();
            info!("{}: sample mask shape: {}x{}x{}", name, c, h, w);
        }
        Err(e) => error!("{}: failed to load {}: {}", name, path.display(), e),
    }
}
