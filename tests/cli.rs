//! Command pipelines run through the same entry points as the binary.

use std::fs;

use clap::Parser;
use insta::{assert_json_snapshot, assert_snapshot};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use pnm::cli::info::ImageInfo;
use pnm::cli::{self, Cli, Commands};
use pnm::output::Printer;

fn dispatch(args: &[&str]) -> pnm::Result<()> {
    let printer = Printer::plain();
    match Cli::try_parse_from(args).unwrap().command {
        Commands::New(args) => cli::new::run(args, &printer),
        Commands::Info(args) => cli::info::run(args, &printer),
        Commands::Convert(args) => cli::convert::run(args, &printer),
        Commands::Transform(args) => cli::transform::run(args, &printer),
        Commands::Draw(args) => cli::draw::run(args, &printer),
        Commands::Completions(args) => cli::completions::run(args),
    }
}

#[test]
fn new_draw_transform_convert() {
    let dir = tempdir().unwrap();
    let path = |name: &str| dir.path().join(name).to_string_lossy().into_owned();

    dispatch(&[
        "pnm", "new", &path("canvas.ppm"), "--width", "4", "--height", "3", "--max", "15",
        "--background", "black",
    ])
    .unwrap();

    fs::write(
        path("scene.yaml"),
        "shapes:\n  - shape: line\n    from: [0, 0]\n    to: [3, 0]\n    color: \"#FFF\"\n",
    )
    .unwrap();

    // "#FFF" is 255 per channel, too bright for a max of 15
    let err = dispatch(&[
        "pnm", "draw", &path("scene.yaml"), &path("drawn.ppm"), "--input", &path("canvas.ppm"),
    ])
    .unwrap_err();
    assert!(matches!(err, pnm::PnmError::Validation { .. }));

    fs::write(
        path("scene.yaml"),
        "shapes:\n  - shape: line\n    from: [0, 0]\n    to: [3, 0]\n    color: [15, 15, 15]\n",
    )
    .unwrap();
    dispatch(&[
        "pnm", "draw", &path("scene.yaml"), &path("drawn.ppm"), "--input", &path("canvas.ppm"),
    ])
    .unwrap();

    dispatch(&[
        "pnm", "transform", &path("drawn.ppm"), &path("flopped.ppm"), "--op", "flop",
    ])
    .unwrap();

    dispatch(&["pnm", "convert", &path("flopped.ppm"), &path("final.pbm")]).unwrap();

    assert_snapshot!(fs::read_to_string(path("final.pbm")).unwrap(), @r###"
    P1
    4 3
    0 0 0 0
    0 0 0 0
    1 1 1 1
    "###);
}

#[test]
fn info_reports_header() {
    let image = pnm::decode("P3\n2 1\n100\n1 2 3 4 5 6\n").unwrap();

    assert_json_snapshot!(ImageInfo::from(&image), @r###"
    {
      "format": "ppm",
      "magic": "P3",
      "width": 2,
      "height": 1,
      "max": 100
    }
    "###);
}

#[test]
fn png_export_scales() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("dot.pbm");
    let output = dir.path().join("dot.png");
    fs::write(&input, "P1\n2 1\n1 0\n").unwrap();

    dispatch(&[
        "pnm",
        "convert",
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--scale",
        "3",
    ])
    .unwrap();

    let png = image::open(&output).unwrap().to_rgb8();
    assert_eq!(png.dimensions(), (6, 3));
    assert_eq!(png.get_pixel(2, 2).0, [0, 0, 0]);
    assert_eq!(png.get_pixel(3, 0).0, [255, 255, 255]);
}
