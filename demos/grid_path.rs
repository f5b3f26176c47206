use colored::*;
use pathgraph::graph::generators::{generate_grid, Cell};
use pathgraph::{find_shortest_path, shortest_path_cost};

// '#' wall, '~' water (slow), '.' street, 'S' start, 'E' end
const MAP: &str = "\
S....#..........#.......
.##..#..~~~~~...#..###..
..#..#..~~~~~......#....
..#.....~~~~~...#..#.##.
..####..........#..#....
.......#####.####..####.
..~~~..#...........#....
..~~~..#..######...#.##.
..~~~......#....#.......
#####..#...#.E..#..~~~..
.......#........#..~~~..";

struct Map {
    width: usize,
    height: usize,
    cells: Vec<Vec<char>>,
}

impl Map {
    fn parse(text: &str) -> Self {
        let cells: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
        let width = cells.iter().map(Vec::len).max().unwrap_or(0);
        Map {
            width,
            height: cells.len(),
            cells,
        }
    }

    fn at(&self, x: usize, y: usize) -> char {
        self.cells.get(y).and_then(|row| row.get(x)).copied().unwrap_or('#')
    }

    fn find(&self, marker: char) -> Option<Cell> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .find(|&(x, y)| self.at(x, y) == marker)
    }

    // Cost of stepping onto a cell
    fn cost(&self, x: usize, y: usize) -> Option<f64> {
        match self.at(x, y) {
            '#' => None,
            '~' => Some(5.0),
            _ => Some(1.0),
        }
    }
}

fn draw(map: &Map, path: &[&Cell]) {
    let mut grid = map.cells.clone();
    for &&(x, y) in path {
        if matches!(grid[y][x], '.' | '~') {
            grid[y][x] = '*';
        }
    }

    println!("{}", format!("┌{}┐", "─".repeat(map.width)).bright_white());
    for row in &grid {
        print!("{}", "│".bright_white());
        for &cell in row {
            let colored_cell = match cell {
                '#' => "█".on_bright_black().white(),
                '~' => cell.to_string().blue(),
                '.' => "·".bright_black(),
                '*' => cell.to_string().bright_yellow().bold(),
                'S' => cell.to_string().bright_green().bold(),
                'E' => cell.to_string().bright_red().bold(),
                _ => cell.to_string().normal(),
            };
            print!("{}", colored_cell);
        }
        println!("{}", "│".bright_white());
    }
    println!("{}", format!("└{}┘", "─".repeat(map.width)).bright_white());

    println!("\n{}", "Legend:".bright_white().bold());
    println!(
        "{} = Wall  {} = Street (1)  {} = Water (5)  {} = Path",
        "█".on_bright_black().white(),
        "·".bright_black(),
        "~".blue(),
        "*".bright_yellow().bold()
    );
}

fn main() {
    env_logger::init();

    let map = Map::parse(MAP);
    let (start, end) = match (map.find('S'), map.find('E')) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            eprintln!("{}", "Map needs both an S and an E".red());
            return;
        }
    };

    let graph = match generate_grid(map.width, map.height, |x, y| map.cost(x, y)) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("{} {}", "Could not build the grid:".red(), e);
            return;
        }
    };
    println!(
        "{} {}x{} map, {} open cells",
        "Solving".bright_cyan().bold(),
        map.width,
        map.height,
        graph.len()
    );

    let path = find_shortest_path(&graph, &start, &end);
    if path.is_empty() {
        println!("{}", "No route from S to E".red().bold());
        draw(&map, &path);
        return;
    }

    draw(&map, &path);
    if let Some(cost) = shortest_path_cost(&graph, &start, &end) {
        println!(
            "\n{} {} steps, cost {}",
            "Route:".bright_white().bold(),
            path.len() - 1,
            cost.to_string().bright_yellow()
        );
    }
}
