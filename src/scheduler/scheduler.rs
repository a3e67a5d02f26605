/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, error, info, trace};
use std::collections::BTreeSet;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::scheduler::{Policy, RunReport, Stop};
use crate::shared::{Floor, Passenger};

/**
 * Dispatches a single elevator car over a batch of passengers.
 *
 * The scheduler owns both passenger collections. A passenger is in exactly one of them
 * until it is dropped off, after which it is no longer tracked at all.
 *
 * # Fields
 * - `policy`:          Strategy used by `run_to_completion`.
 * - `start_floor`:     Floor the car was created at, kept for the run report.
 * - `current_floor`:   Present position of the car.
 * - `total_distance`:  Sum of the absolute floor deltas of every move so far.
 * - `waiting`:         Passengers not yet picked up.
 * - `in_car`:          Passengers aboard, not yet at their destination.
 * - `stops`:           Log of every floor service, in order. Cumulative across runs,
 *                      like `total_distance`.
 *
 */
#[derive(Debug, Clone)]
pub struct ElevatorScheduler {
    policy: Policy,
    start_floor: Floor,
    current_floor: Floor,
    total_distance: u64,
    waiting: Vec<Passenger>,
    in_car: Vec<Passenger>,
    stops: Vec<Stop>,
}

impl ElevatorScheduler {
    pub fn new(start_floor: Floor) -> ElevatorScheduler {
        ElevatorScheduler::with_policy(start_floor, Policy::default())
    }

    pub fn with_policy(start_floor: Floor, policy: Policy) -> ElevatorScheduler {
        ElevatorScheduler {
            policy,
            start_floor,
            current_floor: start_floor,
            total_distance: 0,
            waiting: Vec::new(),
            in_car: Vec::new(),
            stops: Vec::new(),
        }
    }

    pub fn add_passengers<I, P>(&mut self, batch: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<Passenger>,
    {
        let before = self.waiting.len();
        for item in batch {
            let passenger: Passenger = item.into();
            trace!("Passenger {} waiting, heading {}", passenger, passenger.direction());
            self.waiting.push(passenger);
        }
        debug!(
            "Added {} passengers, {} now waiting",
            self.waiting.len() - before,
            self.waiting.len()
        );
    }

    pub fn move_to(&mut self, floor: Floor) {
        let delta = self.current_floor.abs_diff(floor);
        trace!("Moving {} -> {} ({} floors)", self.current_floor, floor, delta);
        self.total_distance += u64::from(delta);
        self.current_floor = floor;
    }

    /// Drops off, then picks up, at the current floor. Someone boarding here is not
    /// dropped in the same call even if their destination is this floor.
    pub fn service_current_floor(&mut self) -> Stop {
        let floor = self.current_floor;

        // Drop-off
        let aboard = self.in_car.len();
        self.in_car.retain(|p| p.destination != floor);
        let dropped_off = aboard - self.in_car.len();

        // Pick-up
        let (boarding, still_waiting): (Vec<Passenger>, Vec<Passenger>) =
            self.waiting.drain(..).partition(|p| p.origin == floor);
        self.waiting = still_waiting;
        let picked_up = boarding.len();
        self.in_car.extend(boarding);

        let stop = Stop {
            floor,
            dropped_off,
            picked_up,
        };
        if !stop.is_empty() {
            debug!(
                "Floor {}: {} off, {} on ({} aboard, {} waiting)",
                floor,
                dropped_off,
                picked_up,
                self.in_car.len(),
                self.waiting.len()
            );
        }
        self.stops.push(stop);
        stop
    }

    /// Delivers every passenger with the configured policy and returns the total
    /// distance traveled, including distance from earlier runs.
    pub fn run_to_completion(&mut self) -> u64 {
        if self.is_idle() {
            return self.total_distance;
        }

        info!(
            "Dispatching {} waiting and {} aboard from floor {} ({} policy)",
            self.waiting.len(),
            self.in_car.len(),
            self.current_floor,
            self.policy
        );

        match self.policy {
            Policy::Greedy => self.run_greedy(),
            Policy::Sweep => self.run_sweep(),
        }
        self.assert_delivered();

        info!(
            "All passengers delivered at floor {}, total distance {}",
            self.current_floor, self.total_distance
        );
        self.total_distance
    }

    /// Snapshot of the whole lifetime of the scheduler, covering every run so far.
    pub fn report(&self) -> RunReport {
        RunReport {
            policy: self.policy,
            start_floor: self.start_floor,
            final_floor: self.current_floor,
            total_distance: self.total_distance,
            stops: self.stops.clone(),
        }
    }

    /***************************************/
    /*             Accessors               */
    /***************************************/
    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn total_distance(&self) -> u64 {
        self.total_distance
    }

    pub fn waiting(&self) -> &[Passenger] {
        &self.waiting
    }

    pub fn in_car(&self) -> &[Passenger] {
        &self.in_car
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn is_idle(&self) -> bool {
        self.waiting.is_empty() && self.in_car.is_empty()
    }

    /***************************************/
    /*              Policies               */
    /***************************************/
    fn run_greedy(&mut self) {
        // Each service after a move boards or drops someone; boarding counts twice.
        let budget = 2 * self.waiting.len() + self.in_car.len() + 1;

        for _ in 0..budget {
            self.service_current_floor();
            if self.is_idle() {
                return;
            }
            match self.nearest_target() {
                Some(floor) => self.move_to(floor),
                None => return,
            }
        }
    }

    fn run_sweep(&mut self) {
        // Up from the start floor
        let start = self.current_floor;
        let upward: BTreeSet<Floor> = self.floors_of_interest().filter(|&f| f >= start).collect();
        self.visit(upward);

        // Down from the turning point
        let top = self.current_floor;
        let downward: BTreeSet<Floor> = self.floors_of_interest().filter(|&f| f < top).collect();
        self.visit(downward.into_iter().rev());

        // Up again for whoever boarded below their destination
        let remaining: BTreeSet<Floor> = self.in_car.iter().map(|p| p.destination).collect();
        self.visit(remaining);
    }

    fn visit<I>(&mut self, floors: I)
    where
        I: IntoIterator<Item = Floor>,
    {
        for floor in floors {
            self.move_to(floor);
            self.service_current_floor();
        }
    }

    /// Waiting origins plus every outstanding destination.
    fn floors_of_interest(&self) -> impl Iterator<Item = Floor> + '_ {
        self.waiting
            .iter()
            .map(|p| p.origin)
            .chain(self.waiting.iter().chain(self.in_car.iter()).map(|p| p.destination))
    }

    /// Closest in-car destination or waiting origin. Ties go to the lower floor.
    fn nearest_target(&self) -> Option<Floor> {
        let current = self.current_floor;
        self.in_car
            .iter()
            .map(|p| p.destination)
            .chain(self.waiting.iter().map(|p| p.origin))
            .min_by_key(|&floor| (floor.abs_diff(current), floor))
    }

    fn assert_delivered(&self) {
        if !self.is_idle() {
            error!(
                "{} policy stranded {} waiting and {} aboard at floor {}",
                self.policy,
                self.waiting.len(),
                self.in_car.len(),
                self.current_floor
            );
            panic!(
                "dispatch finished with undelivered passengers: waiting {:?}, aboard {:?}",
                self.waiting, self.in_car
            );
        }
    }
}
