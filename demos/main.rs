use anyhow::{Context, Result};
use grasp_maxcut::{
    Graph, GraspConfig, LocalSearchConfig, RandomizedConfig, SemiGreedyConfig, Side,
};
use std::path::Path;
use std::time;

fn main() -> Result<()> {
    env_logger::init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        anyhow::bail!("usage: main <instance.rud>...");
    }

    println!("name\t|V|\t|E|\trandomized\tgreedy\tsemi-greedy\tlocal-avg\tgrasp-best\tgrasp-sweeps");
    for path in paths.iter() {
        let graph = Graph::deserialize_instance(path)
            .with_context(|| format!("could not load graph from {path}"))?;
        let name = Path::new(path)
            .file_stem()
            .map(|s| s.to_string_lossy().to_uppercase())
            .unwrap_or_else(|| path.clone());

        let t1 = time::Instant::now();
        let randomized = graph.randomized_cut(&RandomizedConfig::default())?;
        let greedy = graph.greedy_cut();
        let semi_greedy = graph.semi_greedy_cut(&SemiGreedyConfig::default())?;
        let local = graph.local_search_random_starts(&LocalSearchConfig::default())?;
        let grasp = graph.grasp(&GraspConfig::default())?;
        log::info!("{name} done in {}ms", t1.elapsed().as_millis());
        log::info!(
            "{name} best cut splits {} | {} vertices",
            grasp.best_partition.members(Side::A).count(),
            grasp.best_partition.members(Side::B).count()
        );

        println!(
            "{name}\t{}\t{}\t{randomized:.1}\t{greedy}\t{semi_greedy}\t{:.1}\t{}\t{:.1}",
            graph.vertex_count(),
            graph.edge_count(),
            local.mean_cut_weight,
            grasp.best_cut_weight,
            grasp.mean_sweeps
        );
    }
    Ok(())
}
