//! Main park state that ties everything together
//!
//! This is the entry point for running the game without any Bevy
//! dependencies.

use log::debug;

use super::commands::{Command, GameEvent};
use super::entities::{Item, Obstacle, Player, Ride, Visitor};
use super::grid::Grid;
use super::types::{GridPos, RideId, RideKind, CANVAS_HEIGHT, CANVAS_WIDTH, CELL_SIZE, ITEM_REWARD};

/// The full game state
///
/// There is exactly one mutator path (`apply`), and every operation
/// runs to completion before the next command is processed.
pub struct Park {
    /// The fixed grid the park is laid out on
    pub grid: Grid,

    /// The player avatar
    pub player: Player,

    /// Collectible items, in insertion order
    pub items: Vec<Item>,

    /// Impassable obstacles, in insertion order
    pub obstacles: Vec<Obstacle>,

    /// Placed rides, in insertion order
    pub rides: Vec<Ride>,

    /// Park visitors; never populated, rendered as an empty set
    pub visitors: Vec<Visitor>,

    /// Ride kind armed for the next placement click
    pub selected_ride: Option<RideKind>,

    /// Next ride ID to assign
    next_id: usize,
}

impl Default for Park {
    fn default() -> Self {
        Self::new()
    }
}

impl Park {
    /// Create an empty park on the standard grid
    pub fn new() -> Self {
        Self::with_grid(Grid::new(CELL_SIZE, CANVAS_WIDTH, CANVAS_HEIGHT))
    }

    /// Create an empty park on a custom grid
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            player: Player::new(GridPos::new(0, 0)),
            items: Vec::new(),
            obstacles: Vec::new(),
            rides: Vec::new(),
            visitors: Vec::new(),
            selected_ride: None,
            next_id: 0,
        }
    }

    /// Create the default park layout: two items, two obstacles,
    /// player at the origin
    pub fn create_default_park() -> Self {
        let mut park = Self::new();
        park.items.push(Item::new(GridPos::new(7, 4)));
        park.items.push(Item::new(GridPos::new(12, 9)));
        park.obstacles.push(Obstacle::new(GridPos::new(6, 6)));
        park.obstacles.push(Obstacle::new(GridPos::new(9, 10)));
        park
    }

    fn next_ride_id(&mut self) -> RideId {
        let id = RideId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Apply one input command and return the user-visible events it
    /// produced
    pub fn apply(&mut self, command: Command) -> Vec<GameEvent> {
        match command {
            Command::Move { dx, dy } => self.move_player(dx, dy),
            Command::SelectRide(kind) => {
                self.select_ride(kind);
                Vec::new()
            }
            Command::PlaceRide { kind, cell } => {
                let placed = self.place_ride_at(kind, cell);
                // The selection is cleared whether or not the cell was
                // free; after a rejected placement the user has to pick
                // a ride again.
                self.selected_ride = None;
                match placed {
                    Some(id) => vec![GameEvent::RidePlaced { id, kind, cell }],
                    None => Vec::new(),
                }
            }
        }
    }

    /// Move the player one cardinal step
    ///
    /// Rejected moves (out of bounds or onto an obstacle) are silent
    /// no-ops: no state change, no events. After any successful call
    /// the player cell is valid and obstacle-free.
    pub fn move_player(&mut self, dx: i32, dy: i32) -> Vec<GameEvent> {
        let candidate = self.player.cell.offset(dx, dy);

        if !self.grid.contains(candidate) {
            debug!("move to {:?} rejected: out of bounds", candidate);
            return Vec::new();
        }
        if self.obstacle_at(candidate) {
            debug!("move to {:?} rejected: obstacle", candidate);
            return Vec::new();
        }

        self.player.cell = candidate;
        self.check_interactions()
    }

    /// Whether any obstacle occupies the cell (first match short-circuits)
    pub fn obstacle_at(&self, cell: GridPos) -> bool {
        self.obstacles.iter().any(|obstacle| obstacle.cell == cell)
    }

    /// The ride occupying a cell, if any
    pub fn ride_at(&self, cell: GridPos) -> Option<&Ride> {
        self.rides.iter().find(|ride| ride.cell == cell)
    }

    /// Post-move scan: fire ride-visited and item-collected side
    /// effects at the player's cell
    ///
    /// Rides are scanned before items, each in insertion order, and
    /// every entry in both collections is examined on every call.
    fn check_interactions(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let cell = self.player.cell;

        for ride in &mut self.rides {
            if ride.cell == cell && !ride.visited {
                ride.visited = true;
                events.push(GameEvent::RideVisited { name: ride.name() });
            }
        }

        for item in &mut self.items {
            if item.cell == cell && !item.collected {
                item.collected = true;
                self.player.score += ITEM_REWARD;
                events.push(GameEvent::ItemCollected {
                    reward: ITEM_REWARD,
                    score: self.player.score,
                });
            }
        }

        events
    }

    /// Arm a ride kind for the next placement click
    pub fn select_ride(&mut self, kind: RideKind) {
        self.selected_ride = Some(kind);
    }

    /// Place a ride at a cell
    ///
    /// Appends a new ride iff no ride already occupies the cell and
    /// returns its id; a placement on an occupied cell is silently
    /// dropped. Rides may overlap items and obstacles.
    pub fn place_ride_at(&mut self, kind: RideKind, cell: GridPos) -> Option<RideId> {
        if self.ride_at(cell).is_some() {
            debug!("placement at {:?} rejected: cell occupied", cell);
            return None;
        }
        let id = self.next_ride_id();
        self.rides.push(Ride::new(id, cell, kind));
        Some(id)
    }

    /// Current score
    pub fn score(&self) -> u32 {
        self.player.score
    }

    /// Print a summary of the park state
    pub fn print_summary(&self) {
        println!("=== Theme Park Summary ===");
        println!(
            "Grid: {}x{} cells ({}px each)",
            self.grid.cols(),
            self.grid.rows(),
            self.grid.cell_size
        );
        println!(
            "Player: ({}, {}), score {}",
            self.player.cell.x, self.player.cell.y, self.player.score
        );
        println!(
            "Items: {} collected / {} total",
            self.items.iter().filter(|i| i.collected).count(),
            self.items.len()
        );
        println!("Obstacles: {}", self.obstacles.len());
        println!("Visitors: {}", self.visitors.len());

        println!("--- Rides ---");
        for ride in &self.rides {
            println!(
                "  {} at ({}, {}): {}",
                ride.name(),
                ride.cell.x,
                ride.cell.y,
                if ride.visited { "visited" } else { "not visited" }
            );
        }

        match self.selected_ride {
            Some(kind) => println!("Pending placement: {}", kind.display_name()),
            None => println!("Pending placement: none"),
        }
    }

    /// Draw a visual map of the park in the terminal
    pub fn draw_map(&self) {
        let cols = self.grid.cols() as usize;
        let rows = self.grid.rows() as usize;
        let mut grid = vec![vec!['.'; cols]; rows];

        let put = |cell: GridPos, ch: char, grid: &mut Vec<Vec<char>>| {
            if self.grid.contains(cell) {
                grid[cell.y as usize][cell.x as usize] = ch;
            }
        };

        // Painted in render order, so later layers overwrite earlier ones
        put(self.player.cell, 'P', &mut grid);
        for item in self.items.iter().filter(|i| !i.collected) {
            put(item.cell, '*', &mut grid);
        }
        for obstacle in &self.obstacles {
            put(obstacle.cell, '#', &mut grid);
        }
        for visitor in &self.visitors {
            put(visitor.cell, 'v', &mut grid);
        }
        for ride in &self.rides {
            let ch = match ride.kind {
                RideKind::FerrisWheel => 'F',
                RideKind::Carousel => 'C',
                RideKind::RollerCoaster => 'R',
            };
            put(ride.cell, ch, &mut grid);
        }

        println!("\n=== Park Map ===");
        println!("Legend: P=Player, *=Item, #=Obstacle, v=Visitor, F=Ferris Wheel, C=Carousel, R=Roller Coaster");
        println!();
        for row in &grid {
            println!("{}", row.iter().collect::<String>());
        }
    }
}
