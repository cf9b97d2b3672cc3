//! Strategy Prompt Templates
//!
//! Instruction templates for each reasoning strategy, the multi-strategy
//! combinator, and the fixed protocol strings used around the reasoning
//! phase. Each template tells the model how to structure its thinking
//! with XML-style markers; the analyzer later checks those markers for
//! presence only, it never parses them.

/// Chain of Thought (CoT) strategy
pub const CHAIN_OF_THOUGHT: &str = r#"You are an expert in Chain of Thought reasoning.

For the given problem, think through it step-by-step, showing your complete reasoning process.

Structure your response using the following XML format:

<reasoning>
  <question>Restate the problem to ensure understanding</question>

  <strategy>chain_of_thought</strategy>

  <process>
    Break down your thinking into clear, logical steps.
    Show each step of your reasoning explicitly.
    Number your steps for clarity.

    Step 1: [Initial analysis]
    Step 2: [Further development]
    ...
  </process>

  <alternatives>
    Consider at least 2 alternative approaches to this problem.
    For each alternative, briefly explain how it would work.
  </alternatives>

  <evaluation>
    Assess the strengths and weaknesses of your primary reasoning approach.
    Explain why your approach is appropriate for this problem.
  </evaluation>

  <conclusion>
    State your final answer clearly and concisely, based on your reasoning above.
  </conclusion>
</reasoning>

Remember to be thorough and transparent in your thinking process, ensuring each logical connection is explicit."#;

/// Tree of Thought (ToT) strategy
pub const TREE_OF_THOUGHT: &str = r#"You are an expert in Tree of Thought reasoning.

For the given problem, explore multiple reasoning paths, developing the most promising ones further.

Structure your response using the following XML format:

<reasoning>
  <question>Restate the problem to ensure understanding</question>

  <strategy>tree_of_thought</strategy>

  <process>
    <branch id="1">
      <description>Describe this approach branch</description>
      <exploration>
        Step 1: [Initial idea]
        Step 2: [Development]
        Step 3: [Further development or outcome]
      </exploration>
      <assessment>Evaluate this branch's promise</assessment>
    </branch>

    <branch id="2">
      <description>Describe a different approach</description>
      <exploration>
        Step 1: [Initial idea]
        Step 2: [Development]
        Step 3: [Further development or outcome]
      </exploration>
      <assessment>Evaluate this branch's promise</assessment>
    </branch>

    <!-- Add more branches as needed -->

    <branch_selection>
      Identify which branch(es) are most promising to pursue further and why.
    </branch_selection>
  </process>

  <alternatives>
    Briefly mention any other approaches you considered but didn't fully explore.
    Explain why you chose not to pursue them in depth.
  </alternatives>

  <evaluation>
    Compare the different branches you explored.
    Discuss the trade-offs between different reasoning paths.
  </evaluation>

  <conclusion>
    Based on your exploration of different reasoning paths, state your final answer.
  </conclusion>
</reasoning>

In your Tree of Thought reasoning, be sure to:
1. Generate diverse initial branches
2. Develop the most promising branches further
3. Prune unpromising paths
4. Provide justification for your branch selection"#;

/// Socratic questioning strategy
pub const SOCRATIC: &str = r#"You are an expert in Socratic questioning for reasoning.

For the given problem, use a series of probing questions to explore the topic deeply.

Structure your response using the following XML format:

<reasoning>
  <question>Restate the problem to ensure understanding</question>

  <strategy>socratic</strategy>

  <process>
    <inquiry>
      <main_question>Ask a fundamental question about the problem</main_question>
      <exploration>Explore possible answers to this question</exploration>
      <follow_up>Ask a follow-up question based on this exploration</follow_up>
      <insight>Note what you've learned from this line of questioning</insight>
    </inquiry>

    <inquiry>
      <!-- Repeat the structure for additional lines of questioning -->
    </inquiry>

    <synthesis>
      Bring together the insights from your different lines of questioning.
    </synthesis>
  </process>

  <alternatives>
    Identify questions that could have led your reasoning in different directions.
    Briefly explore how these might have changed your approach.
  </alternatives>

  <evaluation>
    Assess how effective your questioning approach was for this particular problem.
    Identify any limitations in your questioning.
  </evaluation>

  <conclusion>
    Based on your Socratic inquiry, state your final answer.
  </conclusion>
</reasoning>

In your Socratic reasoning, focus on:
1. Asking clear, fundamental questions
2. Exploring assumptions
3. Seeking evidence and reasoning
4. Examining implications and consequences
5. Questioning the question itself when appropriate"#;

/// First Principles strategy
pub const FIRST_PRINCIPLES: &str = r#"You are an expert in First Principles reasoning.

For the given problem, break it down to its fundamental truths and build up from there.

Structure your response using the following XML format:

<reasoning>
  <question>Restate the problem to ensure understanding</question>

  <strategy>first_principles</strategy>

  <process>
    <axioms>
      List the fundamental truths or principles that are relevant to this problem.
      These should be statements that are self-evident or supported by strong evidence.
    </axioms>

    <decomposition>
      Break down the problem into its basic components.
      Show how each component relates to your fundamental principles.
    </decomposition>

    <reconstruction>
      Rebuild your understanding of the problem from these first principles.
      Show how the solution emerges from fundamental truths.
    </reconstruction>
  </process>

  <alternatives>
    Consider alternative sets of first principles that could be applied.
    Explore how different fundamental assumptions would change your approach.
  </alternatives>

  <evaluation>
    Assess the reliability of your chosen first principles.
    Discuss any limitations of your approach.
  </evaluation>

  <conclusion>
    Based on your first principles analysis, state your final answer.
  </conclusion>
</reasoning>

In your First Principles reasoning, be sure to:
1. Identify truly fundamental principles, not just assumptions
2. Question conventional wisdom
3. Build up your solution systematically
4. Be explicit about causal relationships"#;

/// Analogical reasoning strategy
pub const ANALOGICAL: &str = r#"You are an expert in Analogical reasoning.

For the given problem, use analogies to familiar situations to gain insight.

Structure your response using the following XML format:

<reasoning>
  <question>Restate the problem to ensure understanding</question>

  <strategy>analogical</strategy>

  <process>
    <problem_analysis>
      Identify the key features and structure of the problem.
    </problem_analysis>

    <analogy id="1">
      <source>Describe a situation that is analogous to the current problem</source>
      <mapping>
        Explicitly map elements from the source to the target problem.
        Identify corresponding entities, relationships, and dynamics.
      </mapping>
      <transfer>
        Transfer insights, solutions, or reasoning approaches from the source to the target.
        Explain how the analogy helps address the current problem.
      </transfer>
    </analogy>

    <analogy id="2">
      <!-- Repeat structure for additional analogies -->
    </analogy>

    <synthesis>
      Integrate insights from your analogies.
      Develop a solution approach informed by these analogies.
    </synthesis>
  </process>

  <alternatives>
    Consider potential limitations of your chosen analogies.
    Suggest other analogies that might provide different insights.
  </alternatives>

  <evaluation>
    Assess how well your analogies map to the target problem.
    Discuss any ways the analogies might be misleading.
  </evaluation>

  <conclusion>
    Based on your analogical reasoning, state your final answer.
  </conclusion>
</reasoning>

In your Analogical reasoning, focus on:
1. Choosing appropriate source analogies with structural similarity
2. Mapping corresponding elements explicitly
3. Identifying both similarities and differences
4. Transferring relevant insights while adapting for differences"#;

/// Counterfactual reasoning strategy
pub const COUNTERFACTUAL: &str = r#"You are an expert in Counterfactual reasoning.

For the given problem, explore hypothetical alternatives to key aspects to gain insight.

Structure your response using the following XML format:

<reasoning>
  <question>Restate the problem to ensure understanding</question>

  <strategy>counterfactual</strategy>

  <process>
    <baseline>
      Establish the actual situation or conventional understanding.
    </baseline>

    <counterfactual id="1">
      <scenario>Describe a specific "what if" scenario that changes a key assumption</scenario>
      <implications>Trace the logical consequences of this change</implications>
      <insight>Explain what this counterfactual reveals about the original problem</insight>
    </counterfactual>

    <counterfactual id="2">
      <!-- Repeat structure for additional counterfactuals -->
    </counterfactual>

    <synthesis>
      Integrate insights from the counterfactual scenarios.
      Explain how they inform your understanding of the problem.
    </synthesis>
  </process>

  <alternatives>
    Suggest other counterfactual scenarios that could provide different insights.
  </alternatives>

  <evaluation>
    Assess how reliable the insights from your counterfactual reasoning are.
    Discuss limitations of comparing hypothetical scenarios to reality.
  </evaluation>

  <conclusion>
    Based on your counterfactual analysis, state your final answer.
  </conclusion>
</reasoning>

In your Counterfactual reasoning, focus on:
1. Creating plausible alternative scenarios
2. Tracing implications systematically
3. Drawing insights that apply to the real problem
4. Using counterfactuals to test causal relationships"#;

/// Step-Back reasoning strategy
pub const STEP_BACK: &str = r#"You are an expert in Step-Back reasoning.

For the given problem, take a step back to view it from a higher level before diving into details.

Structure your response using the following XML format:

<reasoning>
  <question>Restate the problem to ensure understanding</question>

  <strategy>step_back</strategy>

  <process>
    <initial_framing>
      Describe how the problem appears at first glance.
    </initial_framing>

    <step_back>
      Take a broader perspective on the problem.
      Consider the wider context, related domains, or higher-level principles.
      Identify patterns or abstractions that might not be apparent from the direct view.
    </step_back>

    <reframing>
      Based on your broader perspective, reframe the problem.
      Show how this new framing changes your approach.
    </reframing>

    <solution_approach>
      From this higher-level perspective, develop your approach to the problem.
      Work through the solution in a systematic way.
    </solution_approach>
  </process>

  <alternatives>
    Consider other ways you could have "stepped back" from the problem.
    Briefly explore how different perspectives might lead to different approaches.
  </alternatives>

  <evaluation>
    Assess the benefits and potential limitations of your stepped-back perspective.
    Consider what might be missed by taking this broader view.
  </evaluation>

  <conclusion>
    Based on your step-back reasoning, state your final answer.
  </conclusion>
</reasoning>

In your Step-Back reasoning, focus on:
1. Identifying higher-level patterns and principles
2. Seeing connections to similar problems or domains
3. Finding the right level of abstraction
4. Bringing insights from the broader view back to the specific problem"#;

/// Multi-strategy combinator template
///
/// Shared across all multi-strategy sessions; `{primary_strategy}` and
/// `{additional_strategies}` are substituted by [`crate::catalog::compose`].
pub const MULTI_STRATEGY: &str = r#"You are an advanced reasoning assistant capable of employing multiple reasoning strategies.

For the given problem, you will primarily use {primary_strategy} reasoning, supplemented by insights from {additional_strategies} approaches.

Structure your response using XML tags to clearly mark different reasoning phases:

<reasoning>
  <question>Restate the problem to ensure understanding</question>

  <primary_strategy>{primary_strategy}</primary_strategy>

  <process>
    <!-- Use the structure appropriate for your primary strategy -->
    <!-- Incorporate elements from your secondary strategies as needed -->
  </process>

  <alternatives>
    Consider alternative approaches to this problem.
    For each alternative, briefly explain how it would work.
  </alternatives>

  <evaluation>
    Assess the strengths and weaknesses of your reasoning approach.
    Explain why your combination of strategies is appropriate for this problem.
  </evaluation>

  <conclusion>
    State your final answer clearly and concisely, based on your reasoning above.
  </conclusion>
</reasoning>

Remember to be thorough and transparent in your thinking process, ensuring each logical connection is explicit."#;

/// Asked once the reasoning phase completes, before any action is taken
pub const PROCEED_QUESTION: &str = "Based on my reasoning above, would you like me to take any actions? I can use tools to help implement any solutions or gather more information.";

/// Asked when a confirmation round-trip yields no clear go-ahead
pub const CLARIFY_REQUEST: &str = "Would you like me to take any specific action based on my reasoning? Please respond with 'yes' if you want me to proceed with actions.";

/// Action-phase handoff text built from the extracted conclusion, or the
/// generic fallback when the final response carried no conclusion marker.
pub fn action_handoff(conclusion: Option<&str>) -> String {
    match conclusion {
        Some(text) => format!(
            "Based on my reasoning, I will act on the following conclusion:\n\n{}\n\nWhat specific action would you like me to take?",
            text
        ),
        None => "I'm ready to act based on my reasoning. What specific action would you like me to take?".into(),
    }
}
