//! Built-in demonstration content used when no host data is supplied.

use payload::{AgentChatWindowInput, Message, Role};

/// Demonstration table shown by the simulated reply and the first canvas toggle.
pub const SAMPLE_TABLE_HTML: &str = r#"<table>
  <thead>
    <tr>
      <th>ID</th>
      <th>Name</th>
      <th>Status</th>
      <th>Revenue</th>
      <th>Growth</th>
    </tr>
  </thead>
  <tbody>
    <tr>
      <td>#001</td>
      <td>Acme Corp</td>
      <td><span style="color: hsl(142 70% 50%)">Active</span></td>
      <td>$1,234,567</td>
      <td>+12.5%</td>
    </tr>
    <tr>
      <td>#002</td>
      <td>Globex Inc</td>
      <td><span style="color: hsl(142 70% 50%)">Active</span></td>
      <td>$892,341</td>
      <td>+8.2%</td>
    </tr>
    <tr>
      <td>#003</td>
      <td>Initech</td>
      <td><span style="color: hsl(45 90% 50%)">Pending</span></td>
      <td>$456,789</td>
      <td>+3.1%</td>
    </tr>
    <tr>
      <td>#004</td>
      <td>Umbrella LLC</td>
      <td><span style="color: hsl(0 70% 55%)">Inactive</span></td>
      <td>$234,567</td>
      <td>-2.4%</td>
    </tr>
    <tr>
      <td>#005</td>
      <td>Stark Industries</td>
      <td><span style="color: hsl(142 70% 50%)">Active</span></td>
      <td>$5,678,901</td>
      <td>+24.7%</td>
    </tr>
  </tbody>
</table>
"#;

/// The greeting shown when the widget starts without data.
pub fn greeting_message() -> Message {
    Message {
        id: "1".to_owned(),
        role: Role::Agent,
        content: "Hello! I'm your AI agent. I can help you analyze data and display results in the canvas panel. \
                  Try asking me to show you some company data!"
            .to_owned(),
        timestamp: "10:30 AM".to_owned(),
        table_html: None,
        metadata: None,
    }
}

/// Fallback input: one greeting, no canvas content, default config.
pub fn sample_input() -> AgentChatWindowInput {
    AgentChatWindowInput {
        messages: vec![greeting_message()],
        initial_state: None,
        config: None,
    }
}
