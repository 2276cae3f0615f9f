use std::env;
use std::fs;
use std::path::Path;

/// Copy a fixture into OUT_DIR for `include_str!`, or write `fallback` when
/// the fixture is missing so the app still builds.
fn stage_fixture(out_dir: &Path, name: &str, fallback: &str) {
    let src = Path::new("../fixtures").join(name);
    let dest = out_dir.join(name);
    if src.exists() {
        fs::copy(&src, &dest).unwrap();
    } else {
        fs::write(&dest, fallback).unwrap();
    }
    println!("cargo:rerun-if-changed=../fixtures/{}", name);
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out_dir = Path::new(&out_dir);

    stage_fixture(
        out_dir,
        "regions.csv",
        "id,name,tds,ph,turbidity,level,lat,lng\n1,Hanoi,120,7.2,2.3,good,21.0285,105.8542\n",
    );
    stage_fixture(
        out_dir,
        "forecast.csv",
        "day,tds,ph,turbidity\nMon,120,7.2,2.3\n",
    );

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SAFEDROP_SITE_NAME");
    println!("cargo:rerun-if-env-changed=SAFEDROP_VIDEO_ID");
}
