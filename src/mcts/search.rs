//! Core MCTS search algorithm.
//!
//! Each simulation cycle walks down the tree with the tree policy, expands
//! the frontier node it reaches, plays out a game from one of the new
//! children with the actor, and propagates the winner back to the root.
//! Wins are counted for one target player per `update` call, so a node's
//! statistics mean the same thing whichever player moves there.

use std::time::Instant;

use tracing::{debug, trace};

use crate::actor::Actor;
use crate::core::{GameRng, GameState, MctsError, PlayerId, Result};

use super::config::SearchParameters;
use super::node::NodeId;
use super::policy::{best_index, MinimaxUcb, SelectionPolicy};
use super::stats::SearchStats;
use super::tree::MctsTree;

/// Hook notified once at the end of every `update` call.
pub trait SearchObserver {
    /// Called with the number of simulation cycles completed.
    fn on_update(&mut self, completed: u32);
}

impl<F: FnMut(u32)> SearchObserver for F {
    fn on_update(&mut self, completed: u32) {
        self(completed)
    }
}

/// Main MCTS search context.
///
/// Owns the playout actor, configuration and RNG. Trees are owned by the
/// caller and passed in, so one tree can be searched, advanced to the
/// chosen child, and searched again.
pub struct MctsSearch<A> {
    /// Playout policy.
    actor: A,

    /// Search configuration.
    config: SearchParameters,

    /// RNG for expansion and randomized selection; playouts use forks.
    rng: GameRng,

    /// Tree policy.
    selection: Box<dyn SelectionPolicy>,

    /// Progress hook.
    observer: Option<Box<dyn SearchObserver>>,

    /// Statistics of the last `update` call.
    stats: SearchStats,
}

impl<A> MctsSearch<A> {
    /// Create a new MCTS search context.
    ///
    /// Fails with `InvalidConfig` if `config` does not validate.
    pub fn new(actor: A, config: SearchParameters) -> Result<Self> {
        config.validate()?;
        let rng = GameRng::new(config.seed);

        Ok(Self {
            actor,
            config,
            rng,
            selection: Box::new(MinimaxUcb),
            observer: None,
            stats: SearchStats::default(),
        })
    }

    /// Set a custom selection policy.
    pub fn with_selection<P: SelectionPolicy + 'static>(mut self, selection: P) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Set a hook called at the end of every `update`.
    pub fn with_observer<O: SearchObserver + 'static>(mut self, observer: O) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Run simulation cycles from `node`, counting wins for `target`.
    ///
    /// Runs `num_simulations` cycles or stops after the first cycle that
    /// ends past the configured time limit. A cycle is never interrupted.
    /// Returns the number of completed cycles; on error the statistics of
    /// the cycles completed before it are kept.
    pub fn update<S>(
        &mut self,
        tree: &mut MctsTree<S>,
        node: NodeId,
        num_simulations: u32,
        target: PlayerId,
    ) -> Result<u32>
    where
        S: GameState,
        A: Actor<S>,
    {
        let start = Instant::now();
        self.stats.reset();

        let mut outcome = Ok(());
        for _ in 0..num_simulations {
            if let Err(err) = self.simulate(tree, node, target) {
                outcome = Err(err);
                break;
            }
            self.stats.iterations += 1;

            if start.elapsed() > self.config.time_limit {
                self.stats.stopped_early = self.stats.iterations < num_simulations;
                break;
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            iterations = self.stats.iterations,
            nodes_expanded = self.stats.nodes_expanded,
            playouts = self.stats.playouts,
            time_us = self.stats.time_us,
            iterations_per_second = self.stats.iterations_per_second(),
            stopped_early = self.stats.stopped_early,
            "Rollouts completed"
        );
        if let Some(observer) = self.observer.as_mut() {
            observer.on_update(self.stats.iterations);
        }

        outcome.map(|()| self.stats.iterations)
    }

    /// Single cycle: select, expand, evaluate, backpropagate.
    fn simulate<S>(&mut self, tree: &mut MctsTree<S>, node: NodeId, target: PlayerId) -> Result<()>
    where
        S: GameState,
        A: Actor<S>,
    {
        let leaf = self.tree_search(tree, node, target);
        self.stats.max_depth = self.stats.max_depth.max(tree.get(leaf).depth);

        let created = tree.expand(leaf);
        if created > 0 {
            self.stats.nodes_expanded += 1;
            trace!(%leaf, created, "expanded");
        }

        // Roll out from a random new child so successor order adds no bias
        let evaluated = self.rng.choose(tree.children(leaf)).copied().unwrap_or(leaf);

        let winner = self.evaluate(&tree.get(evaluated).state)?;
        self.backpropagate(tree, evaluated, winner, target);
        trace!(%evaluated, %winner, "cycle complete");
        Ok(())
    }

    /// Descend from `node` to a frontier node along the best children.
    ///
    /// Where the target player moves the highest tree policy value wins;
    /// where the opponent moves, the lowest. Ties go to the earliest child.
    /// Deterministic for a given tree.
    pub fn tree_search<S: GameState>(
        &self,
        tree: &MctsTree<S>,
        node: NodeId,
        target: PlayerId,
    ) -> NodeId {
        let mut current = node;
        loop {
            let parent = tree.get(current);
            let is_opponent = parent.state.current_player() != target;

            let scores = parent.children.iter().map(|&child| {
                self.selection
                    .score(parent.visits, tree.get(child).stats(), is_opponent, &self.config)
            });

            match best_index(scores, is_opponent) {
                Some(i) => current = parent.children[i],
                None => return current,
            }
        }
    }

    /// Play `state` out to the end with the actor and return the winner.
    ///
    /// Moves are applied to transient copies; the tree is not touched.
    /// Fails with `NonTerminatingPlayout` after `max_playout_length` moves
    /// without a winner.
    pub fn evaluate<S>(&mut self, state: &S) -> Result<PlayerId>
    where
        S: GameState,
        A: Actor<S>,
    {
        let limit = self.config.max_playout_length;
        let mut rng = self.rng.fork();
        let mut current = state.clone();
        let mut moves = 0u32;

        let winner = loop {
            if let Some(winner) = current.winner() {
                break winner;
            }
            if moves >= limit {
                return Err(MctsError::NonTerminatingPlayout { limit });
            }
            let mv = self.actor.epsilon_greedy_action(&current, self.config.epsilon, &mut rng)?;
            current = current.apply_move(&mv);
            moves += 1;
        };

        self.stats.playouts += 1;
        self.stats.playout_moves += u64::from(moves);
        Ok(winner)
    }

    /// Record one playout on `node` and every ancestor up to the root.
    ///
    /// Each node gains a visit, and a win if `winner` is `target`.
    pub fn backpropagate<S>(
        &self,
        tree: &mut MctsTree<S>,
        node: NodeId,
        winner: PlayerId,
        target: PlayerId,
    ) {
        let won = winner == target;
        let mut current = node;
        while !current.is_none() {
            let n = tree.get_mut(current);
            n.record(won);
            current = n.parent;
        }
    }

    /// Search from `node` for `starting_player`, then pick a child.
    ///
    /// Runs `num_simulations` cycles (see [`update`](Self::update)) and
    /// then applies [`choose_action`](Self::choose_action).
    pub fn select_action<S>(
        &mut self,
        tree: &mut MctsTree<S>,
        node: NodeId,
        starting_player: PlayerId,
        randomize: bool,
    ) -> Result<NodeId>
    where
        S: GameState,
        A: Actor<S>,
    {
        self.update(tree, node, self.config.num_simulations, starting_player)?;
        self.choose_action(tree, node, starting_player, randomize)
    }

    /// Pick a child of `node` from the statistics already in the tree.
    ///
    /// With `randomize`, any child uniformly. Otherwise the child with the
    /// highest `Q = wins / (visits + 1)` if `starting_player` moves at
    /// `node`, or the lowest if the opponent does. Ties go to the earliest
    /// child. Fails with `NoLegalMoves` if `node` has no children.
    pub fn choose_action<S: GameState>(
        &mut self,
        tree: &MctsTree<S>,
        node: NodeId,
        starting_player: PlayerId,
        randomize: bool,
    ) -> Result<NodeId> {
        let children = tree.children(node);
        if randomize {
            return self.rng.choose(children).copied().ok_or(MctsError::NoLegalMoves);
        }

        let minimize = tree.get(node).state.current_player() != starting_player;
        let q_values = children.iter().map(|&c| tree.get(c).stats().q_value());
        best_index(q_values, minimize)
            .map(|i| children[i])
            .ok_or(MctsError::NoLegalMoves)
    }

    /// Get statistics of the last `update` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchParameters {
        &self.config
    }

    /// Get the actor reference.
    pub fn actor(&self) -> &A {
        &self.actor
    }
}
